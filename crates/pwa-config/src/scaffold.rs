//! Helpers for scaffolding a manifest interactively

use once_cell::sync::Lazy;
use pwa_manifest::{IconEntry, ManifestDocument};
use regex::Regex;

pub const DEFAULT_ICON_FOLDER: &str = "/icons";
pub const DEFAULT_ICON_PURPOSE: &str = "any maskable";
pub const ICON_SIZE_CHOICES: &[&str] = &["192x192", "512x512", "144x144", "384x384", "96x96", "72x72"];
pub const RECOMMENDED_ICON_SIZES: &[&str] = &["192x192", "512x512"];

static HEX_COLOR: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").ok());

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.as_ref().is_some_and(|re| re.is_match(value))
}

/// One PNG icon per size under `folder`, named `icon-{size}.png`
pub fn icons_from_folder(folder: &str, sizes: &[&str]) -> Vec<IconEntry> {
    let folder = folder.trim_end_matches('/');
    sizes
        .iter()
        .map(|size| {
            IconEntry::new(format!("{}/icon-{}.png", folder, size), *size, "image/png")
                .with_purpose(DEFAULT_ICON_PURPOSE)
        })
        .collect()
}

/// Folder of the first icon in an existing manifest
pub fn icon_folder_of(existing: &ManifestDocument) -> String {
    existing
        .get("icons")
        .and_then(|icons| icons.as_array())
        .and_then(|icons| icons.first())
        .and_then(|icon| icon.get("src"))
        .and_then(|src| src.as_str())
        .and_then(|src| src.rsplit_once('/'))
        .map(|(folder, _)| folder)
        .filter(|folder| !folder.is_empty())
        .unwrap_or(DEFAULT_ICON_FOLDER)
        .to_string()
}
