//! Core domain models

pub mod env_store;
pub mod manifest;
pub mod profile;

pub use env_store::{EnvEntry, EnvStore};
pub use manifest::{placeholder_keys, ApplicationId, ManifestPlaceholders, REQUIRED_KEYS};
pub use profile::{AndroidProfile, BuildProfile, BuildTypeProfile, EnvFileSettings};
