//! Environment file loader
//!
//! Parsing rules, in order per line:
//! - Leading and trailing whitespace is ignored
//! - Blank lines are skipped
//! - Lines whose first non-whitespace character is `#` are comments
//! - Everything else must be `KEY=VALUE`; a line without `=` is fatal
//! - Keys and values are trimmed; a `#` after the `=` belongs to the value
//! - When a key is assigned more than once, the last assignment wins

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::error::EnvError;
use crate::domain::models::{EnvEntry, EnvStore};

/// Loads environment files from disk into an [`EnvStore`].
pub struct EnvLoader;

impl EnvLoader {
    /// Read and parse the environment file at `path`.
    ///
    /// # Errors
    /// Returns [`EnvError::NotFound`] when the file does not exist,
    /// [`EnvError::Io`] for any other read failure, and [`EnvError::Parse`]
    /// when a line is not a comment, blank, or `KEY=VALUE` assignment.
    pub fn load(path: &Path) -> Result<EnvStore, EnvError> {
        info!(path = %path.display(), "loading environment file");

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                EnvError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse environment file content. `path` is carried into the store and
    /// into errors so diagnostics name the file they came from.
    ///
    /// # Errors
    /// Returns [`EnvError::Parse`] with a 1-based line number for any line
    /// that is not blank, a comment, or a `KEY=VALUE` assignment.
    pub fn parse(content: &str, path: &Path) -> Result<EnvStore, EnvError> {
        let mut entries = Vec::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(EnvError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: raw.to_string(),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(EnvError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: raw.to_string(),
                });
            }

            if !seen.insert(key.to_string()) {
                debug!(key, line = index + 1, "duplicate key, later assignment wins");
            }

            entries.push(EnvEntry::new(key, value.trim()));
        }

        debug!(
            path = %path.display(),
            keys = seen.len(),
            "environment file parsed"
        );

        Ok(EnvStore::from_entries(path, entries))
    }
}
