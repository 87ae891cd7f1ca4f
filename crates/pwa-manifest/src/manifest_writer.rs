//! JSON file utilities for manifests and config files
//!
//! Reading tolerates `//` and `/* */` comments; writing always produces
//! two-space indented JSON with a trailing newline.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::merge::as_document;
use crate::types::ManifestDocument;

/// Remove `//` line comments and `/* */` block comments outside of strings
pub fn strip_json_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out.trim().to_string()
}

/// Read and deserialize a JSON or JSONC file
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    debug!("Reading JSON from {:?}", path);
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&strip_json_comments(&content))?;
    Ok(value)
}

/// Serialize `data` as pretty JSON with a trailing newline
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), ManifestError> {
    let mut content = serde_json::to_string_pretty(data)?;
    content.push('\n');
    fs::write(path, content)?;
    debug!("Wrote JSON to {:?}", path);
    Ok(())
}

/// Read a manifest file as an ordered JSON object
pub fn read_from_path(manifest_path: &Path) -> Result<ManifestDocument, ManifestError> {
    let value: serde_json::Value = read_json_file(manifest_path)?;
    let manifest =
        as_document(value).ok_or_else(|| ManifestError::NotAnObject(manifest_path.to_path_buf()))?;
    info!("Manifest loaded with {} members", manifest.len());
    Ok(manifest)
}

/// Write a manifest file, creating parent directories as needed
pub fn write_to_path(manifest: &ManifestDocument, output_path: &Path) -> Result<(), ManifestError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_json_file(output_path, manifest)?;
    info!("Manifest written successfully to: {:?}", output_path);
    Ok(())
}
