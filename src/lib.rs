//! Envforge - Deterministic build configuration from environment files
//!
//! Envforge loads `KEY=VALUE` environment files, validates the build identity
//! they declare, and assembles the application id and manifest placeholders a
//! mobile app module needs. Resolution is synchronous and deterministic: the
//! same file and profile always produce the same configuration, and a missing
//! key or malformed value aborts instead of producing a partial build.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Environment store, build profile, and
//!   manifest models plus the error taxonomy
//! - **Infrastructure Layer** (`infrastructure`): Environment file loading,
//!   profile loading, manifest assembly and rendering, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use envforge::domain::models::BuildProfile;
//! use envforge::infrastructure::env::EnvLoader;
//! use envforge::infrastructure::manifest::ManifestAssembler;
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = EnvLoader::load(std::path::Path::new("../.env"))?;
//!     let config = ManifestAssembler::assemble(&store, &BuildProfile::default())?;
//!     println!("{}", config.application_id);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::error::{AssemblyError, EnvError, InvalidApplicationId};
pub use domain::models::{
    placeholder_keys, AndroidProfile, ApplicationId, BuildProfile, BuildTypeProfile, EnvEntry,
    EnvFileSettings, EnvStore, ManifestPlaceholders, REQUIRED_KEYS,
};
pub use infrastructure::env::EnvLoader;
pub use infrastructure::manifest::{
    ManifestAssembler, ManifestRenderer, RenderError, ResolvedBuildConfig,
};
pub use infrastructure::profile::{ProfileError, ProfileLoader};
