use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing manifest files
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Expected a JSON object at the top level of {}", .0.display())]
    NotAnObject(PathBuf),
}
