//! Centralized error types for the pwa CLI

use pwa_config::ConfigError;
use pwa_manifest::ManifestError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Cancelled by user")]
    Cancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Follow-up hint shown under the error message
    pub fn tip(&self) -> Option<String> {
        match self {
            CliError::Config(ConfigError::ConfigNotFound(_)) => {
                Some("Run 'pwa init' to create it.".to_string())
            }
            CliError::Config(ConfigError::ProjectRootNotFound(_)) => {
                Some("Run pwa from inside a project, or pass --project-dir.".to_string())
            }
            CliError::Config(ConfigError::ManifestNotFound(_)) => Some(format!(
                "Searched {}. Create a manifest with 'pwa init --manifest' or pass --manifest-path.",
                pwa_config::discovery::MANIFEST_LOCATIONS.join(", ")
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_errors_display_transparently() {
        let err = CliError::from(ConfigError::ConfigNotFound(PathBuf::from("/p/pwa.config.json")));
        assert_eq!(err.to_string(), "pwa.config.json not found at /p/pwa.config.json");
        assert!(err.tip().is_some_and(|t| t.contains("pwa init")));
    }

    #[test]
    fn test_manifest_not_found_tip_lists_locations() {
        let err = CliError::from(ConfigError::ManifestNotFound(PathBuf::from("/p")));
        assert!(err
            .tip()
            .is_some_and(|t| t.contains("public/manifest.json")));
    }

    #[test]
    fn test_cancelled_has_no_tip() {
        assert!(CliError::Cancelled.tip().is_none());
    }
}
