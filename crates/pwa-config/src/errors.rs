use pwa_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or reading project configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not find project root (looking for package.json) from {}", .0.display())]
    ProjectRootNotFound(PathBuf),

    #[error("pwa.config.json not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Could not find a manifest under {}", .0.display())]
    ManifestNotFound(PathBuf),
}

impl ConfigError {
    /// Attach `path` to a manifest-layer error
    pub fn from_manifest(path: PathBuf, err: ManifestError) -> Self {
        match err {
            ManifestError::Io(e) => ConfigError::Io(e),
            ManifestError::Parse(source) => ConfigError::Parse { path, source },
            ManifestError::NotAnObject(path) => ConfigError::Parse {
                source: serde::de::Error::custom("expected a JSON object"),
                path,
            },
        }
    }
}
