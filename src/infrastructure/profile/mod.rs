//! Build profile loading
//!
//! Hierarchical profile configuration using figment:
//! - Programmatic defaults
//! - `forge.yaml` in the project root
//! - `FORGE_*` environment variables

pub mod loader;

pub use loader::{ProfileError, ProfileLoader};
