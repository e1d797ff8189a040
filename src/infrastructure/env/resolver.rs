//! Environment file path resolution
//!
//! The environment file conventionally sits one directory above the project
//! root so a single secrets file can serve the whole app tree. Profiles can
//! opt out of that and keep the file inside the project root.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::models::EnvFileSettings;

/// Resolve the expected environment file path for a project root.
///
/// A relative `project_root` is anchored to the working directory first, so
/// the default `.` climbs to the directory that actually contains the
/// project. With `search_parent` enabled the file is looked up in the parent
/// of the anchored root; a root with no parent falls back to the root
/// itself.
pub fn resolve(project_root: &Path, settings: &EnvFileSettings) -> PathBuf {
    let root = absolute_root(project_root);
    let base = if settings.search_parent {
        root.parent().unwrap_or(&root)
    } else {
        root.as_path()
    };

    let path = base.join(&settings.file_name);
    debug!(path = %path.display(), "resolved environment file path");
    path
}

/// Absolute form of the project root, with `CurDir` components normalized
/// away. `parent()` climbs this path; on a relative root like the default
/// `.` the literal parent would be the empty path.
fn absolute_root(project_root: &Path) -> PathBuf {
    if project_root.is_absolute() {
        return project_root.to_path_buf();
    }

    env::current_dir().map_or_else(
        |_| project_root.to_path_buf(),
        |cwd| cwd.join(project_root).components().collect(),
    )
}
