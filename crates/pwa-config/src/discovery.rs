//! Project and manifest discovery

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Conventional manifest locations, checked in order
pub const MANIFEST_LOCATIONS: &[&str] = &[
    "manifest.json",
    "public/manifest.json",
    "app/manifest.json",
    "app/manifest.webmanifest",
    "public/manifest.webmanifest",
];

/// Where a new manifest goes when none exists yet
pub const DEFAULT_MANIFEST_LOCATION: &str = "public/manifest.json";

/// Marker file identifying a project root
pub const PROJECT_MARKER: &str = "package.json";

/// Walk up from `start` to the first directory containing `package.json`
pub fn find_project_root(start: &Path) -> Result<PathBuf, ConfigError> {
    let start = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()?.join(start)
    };

    let mut current = Some(start.as_path());
    while let Some(dir) = current {
        if dir.join(PROJECT_MARKER).is_file() {
            debug!("Project root: {:?}", dir);
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }

    Err(ConfigError::ProjectRootNotFound(start))
}

/// First existing manifest under `project_root`
pub fn find_manifest(project_root: &Path) -> Option<PathBuf> {
    MANIFEST_LOCATIONS
        .iter()
        .map(|location| project_root.join(location))
        .find(|path| path.is_file())
}

/// Path of `pwa.config.json` for a project
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILENAME)
}

/// Manifest to operate on: an explicit path relative to the root, or the
/// first conventional location that exists
pub fn resolve_manifest_path(
    project_root: &Path,
    explicit: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(project_root.join(path)),
        None => find_manifest(project_root)
            .ok_or_else(|| ConfigError::ManifestNotFound(project_root.to_path_buf())),
    }
}
