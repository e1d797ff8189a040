use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or querying an environment file.
///
/// Every variant is fatal: evaluation aborts before any build output is
/// produced, and the message carries the offending path or key.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Environment file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read environment file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed line {line} in {}: {content:?}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number of the first offending line
        line: usize,
        content: String,
    },

    #[error("Required key '{key}' missing from {}", path.display())]
    MissingKey { key: String, path: PathBuf },
}

/// Rejection of a malformed application/package identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid application id {value:?}: {reason}")]
pub struct InvalidApplicationId {
    pub value: String,
    pub reason: &'static str,
}

/// Failures while assembling the resolved build configuration.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    InvalidApplicationId(#[from] InvalidApplicationId),
}
