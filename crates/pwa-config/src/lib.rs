//! Project configuration for the pwa CLI
//!
//! Reads `pwa.config.json`, converts it to the canonical manifest and meta
//! tag configs, and locates the project root and its manifest.

pub mod config;
pub mod discovery;
pub mod errors;
pub mod scaffold;

pub use config::{PwaConfig, CONFIG_FILENAME};
pub use discovery::{config_path, find_manifest, find_project_root, resolve_manifest_path};
pub use errors::ConfigError;
