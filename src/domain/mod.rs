//! Domain layer for build-configuration evaluation
//!
//! This module contains the core models and the error taxonomy.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::{AssemblyError, EnvError, InvalidApplicationId};
