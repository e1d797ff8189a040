//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Environment file loading and path resolution
//! - Build profile loading (YAML file plus environment overrides)
//! - Manifest assembly and template rendering
//! - Logging infrastructure
//!
//! Infrastructure implementations produce and consume the models defined in
//! the domain layer.

pub mod env;
pub mod logging;
pub mod manifest;
pub mod profile;
