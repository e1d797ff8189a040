//! Environment file loading
//!
//! Reads `KEY=VALUE` files into an immutable [`EnvStore`](crate::domain::models::EnvStore):
//! - Path resolution relative to the project root
//! - Line-oriented parsing with comments and blank lines skipped
//! - Later assignments to the same key win

pub mod loader;
pub mod resolver;

pub use loader::EnvLoader;
