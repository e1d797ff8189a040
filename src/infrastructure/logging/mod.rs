//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON log formatting
//! - Diagnostics on stderr, command output on stdout
//! - Secret redaction for sensitive values

pub mod logger;
pub mod redaction;

pub use logger::{init, LogFormat};
pub use redaction::SecretRedactor;
