//! `pwa.config.json` model
//!
//! The config file is the camelCase, user-authored mirror of the canonical
//! manifest config plus a `metaTags` section.

use pwa_manifest::{
    AppleTouchIcon, Display, IconEntry, ManifestConfig, MetaTagsConfig, Orientation,
    StatusBarStyle, TextDirection,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::errors::ConfigError;

pub const CONFIG_FILENAME: &str = "pwa.config.json";

/// Contents of `pwa.config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(default)]
    pub icons: Vec<IconEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<TextDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_tags: Option<MetaTagsConfig>,
}

impl PwaConfig {
    /// Starter config written by `pwa init`
    pub fn template() -> Self {
        PwaConfig {
            name: "My App".to_string(),
            short_name: "MyApp".to_string(),
            description: "My awesome progressive web app".to_string(),
            start_url: "/".to_string(),
            display: Some(Display::Standalone),
            theme_color: Some("#000000".to_string()),
            background_color: Some("#ffffff".to_string()),
            orientation: None,
            icons: vec![
                IconEntry::new("/icons/icon-192x192.png", "192x192", "image/png")
                    .with_purpose("any maskable"),
                IconEntry::new("/icons/icon-512x512.png", "512x512", "image/png")
                    .with_purpose("any maskable"),
            ],
            categories: None,
            lang: None,
            dir: None,
            meta_tags: Some(MetaTagsConfig {
                manifest_path: Some("/manifest.json".to_string()),
                theme_color: None,
                apple_mobile_web_app_capable: Some(true),
                apple_mobile_web_app_status_bar_style: Some(StatusBarStyle::Default),
                apple_mobile_web_app_title: Some("My App".to_string()),
                apple_touch_icons: vec![AppleTouchIcon {
                    href: "/icons/apple-touch-icon.png".to_string(),
                    sizes: None,
                }],
            }),
        }
    }

    /// Load a config file, tolerating comments
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }
        debug!("Loading config from {:?}", path);
        pwa_manifest::manifest_writer::read_json_file(path)
            .map_err(|e| ConfigError::from_manifest(path.to_path_buf(), e))
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        pwa_manifest::manifest_writer::write_json_file(path, self)
            .map_err(|e| ConfigError::from_manifest(path.to_path_buf(), e))
    }

    /// Canonical manifest config; the renamed members are the camelCase ones
    pub fn to_manifest_config(&self) -> ManifestConfig {
        ManifestConfig {
            name: self.name.clone(),
            short_name: self.short_name.clone(),
            description: self.description.clone(),
            start_url: self.start_url.clone(),
            display: self.display.clone(),
            background_color: self.background_color.clone(),
            theme_color: self.theme_color.clone(),
            orientation: self.orientation.clone(),
            icons: self.icons.clone(),
            categories: self.categories.clone(),
            lang: self.lang.clone(),
            dir: self.dir.clone(),
        }
    }

    /// Meta tag config; the theme color falls back to the top-level one
    pub fn to_meta_tags_config(&self) -> MetaTagsConfig {
        let Some(meta) = &self.meta_tags else {
            return MetaTagsConfig::default();
        };

        let mut config = meta.clone();
        if config.theme_color.as_deref().map_or(true, str::is_empty) {
            config.theme_color = self.theme_color.clone();
        }
        config
    }
}
