//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a workspace layout with an app project root and an environment
/// file in the workspace root, the way app trees keep their secrets one
/// level above the module.
///
/// Returns the TempDir (for lifetime management) and the project root path.
#[allow(dead_code)]
pub fn setup_project(env_content: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let project_root = dir.path().join("app");
    fs::create_dir(&project_root).expect("Failed to create project root");
    fs::write(dir.path().join(".env"), env_content).expect("Failed to write env file");
    (dir, project_root)
}

/// A complete environment file covering every required key.
#[allow(dead_code)]
pub fn complete_env() -> &'static str {
    "# build identity\nPAGE=com.example.app\nKAKAO_NATIVE_APP_KEY=abcdef1234567890\n"
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn test_setup_project_layout() {
        let (dir, project_root) = setup_project("PAGE=com.example.app\n");
        assert!(project_root.is_dir());
        assert!(dir.path().join(".env").is_file());
        assert_eq!(project_root.parent().unwrap(), dir.path());
    }
}
