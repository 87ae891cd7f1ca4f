//! Manifest generation
//!
//! Projects a [`ManifestConfig`] onto a [`ManifestDocument`]. Optional members
//! that are absent produce no key at all.

use serde_json::{Map, Value};

use crate::types::{Display, IconEntry, ManifestConfig, ManifestDocument, Orientation, TextDirection};

const DEFAULT_DISPLAY: &str = "standalone";

/// Generate the manifest document for `config`.
///
/// The four required members are always emitted and `display` falls back to
/// `standalone`. Key order is fixed so repeated runs produce identical files.
pub fn generate_manifest(config: &ManifestConfig) -> ManifestDocument {
    let mut manifest = Map::new();

    manifest.insert("name".into(), Value::from(config.name.as_str()));
    manifest.insert("short_name".into(), Value::from(config.short_name.as_str()));
    manifest.insert("description".into(), Value::from(config.description.as_str()));
    manifest.insert("start_url".into(), Value::from(config.start_url.as_str()));

    let display = present(config.display.as_ref().map(Display::as_str)).unwrap_or(DEFAULT_DISPLAY);
    manifest.insert("display".into(), Value::from(display));

    if let Some(color) = present(config.background_color.as_deref()) {
        manifest.insert("background_color".into(), Value::from(color));
    }
    if let Some(color) = present(config.theme_color.as_deref()) {
        manifest.insert("theme_color".into(), Value::from(color));
    }
    if let Some(orientation) = present(config.orientation.as_ref().map(Orientation::as_str)) {
        manifest.insert("orientation".into(), Value::from(orientation));
    }

    let icons = config.icons.iter().map(icon_value).collect();
    manifest.insert("icons".into(), Value::Array(icons));

    if let Some(categories) = config.categories.as_ref().filter(|c| !c.is_empty()) {
        let categories = categories.iter().map(|c| Value::from(c.as_str())).collect();
        manifest.insert("categories".into(), Value::Array(categories));
    }
    if let Some(lang) = present(config.lang.as_deref()) {
        manifest.insert("lang".into(), Value::from(lang));
    }
    if let Some(dir) = present(config.dir.as_ref().map(TextDirection::as_str)) {
        manifest.insert("dir".into(), Value::from(dir));
    }

    manifest
}

// Empty strings count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// src, sizes, type, purpose - in that order
fn icon_value(icon: &IconEntry) -> Value {
    let mut entry = Map::new();
    entry.insert("src".into(), Value::from(icon.src.as_str()));
    entry.insert("sizes".into(), Value::from(icon.sizes.as_str()));
    entry.insert("type".into(), Value::from(icon.mime_type.as_str()));
    if let Some(purpose) = present(icon.purpose.as_deref()) {
        entry.insert("purpose".into(), Value::from(purpose));
    }
    Value::Object(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ManifestConfig {
        let mut config = ManifestConfig::new("Test App", "Test", "Test description", "/");
        config
            .icons
            .push(IconEntry::new("/icon.png", "192x192", "image/png"));
        config
    }

    #[test]
    fn test_generates_required_fields_and_default_display() {
        let manifest = generate_manifest(&base_config());
        assert_eq!(manifest["name"], "Test App");
        assert_eq!(manifest["short_name"], "Test");
        assert_eq!(manifest["description"], "Test description");
        assert_eq!(manifest["start_url"], "/");
        assert_eq!(manifest["display"], "standalone");
    }

    #[test]
    fn test_absent_optionals_produce_no_keys() {
        let manifest = generate_manifest(&base_config());
        for key in [
            "background_color",
            "theme_color",
            "orientation",
            "categories",
            "lang",
            "dir",
        ] {
            assert!(!manifest.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn test_optional_fields_are_emitted_when_present() {
        let mut config = base_config();
        config.background_color = Some("#000000".into());
        config.theme_color = Some("#ffffff".into());
        config.orientation = Some(Orientation::Portrait);
        config.categories = Some(vec!["games".into()]);
        config.lang = Some("en".into());
        config.dir = Some(TextDirection::Ltr);

        let manifest = generate_manifest(&config);
        assert_eq!(manifest["background_color"], "#000000");
        assert_eq!(manifest["theme_color"], "#ffffff");
        assert_eq!(manifest["orientation"], "portrait");
        assert_eq!(manifest["categories"], serde_json::json!(["games"]));
        assert_eq!(manifest["lang"], "en");
        assert_eq!(manifest["dir"], "ltr");
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let mut config = base_config();
        config.categories = Some(Vec::new());
        assert!(!generate_manifest(&config).contains_key("categories"));
    }

    #[test]
    fn test_icon_purpose_only_when_defined() {
        let mut config = base_config();
        config.icons.push(
            IconEntry::new("/icon-512.png", "512x512", "image/png").with_purpose("any maskable"),
        );

        let manifest = generate_manifest(&config);
        assert!(manifest["icons"][0].get("purpose").is_none());
        assert_eq!(manifest["icons"][1]["purpose"], "any maskable");

        let keys: Vec<&str> = manifest["icons"][1]
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["src", "sizes", "type", "purpose"]);
    }

    #[test]
    fn test_custom_display_passes_through() {
        let mut config = base_config();
        config.display = Some(Display::from("window-controls-overlay"));
        assert_eq!(
            generate_manifest(&config)["display"],
            "window-controls-overlay"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = base_config();
        let first = serde_json::to_string(&generate_manifest(&config)).unwrap_or_default();
        let second = serde_json::to_string(&generate_manifest(&config)).unwrap_or_default();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_optional_strings_are_omitted() {
        let mut config = base_config();
        config.theme_color = Some(String::new());
        config.background_color = Some(String::new());
        config.orientation = Some(Orientation::from(""));
        config.lang = Some(String::new());
        config.dir = Some(TextDirection::from(""));
        config.icons[0].purpose = Some(String::new());

        let manifest = generate_manifest(&config);
        for key in ["theme_color", "background_color", "orientation", "lang", "dir"] {
            assert!(manifest.get(key).is_none(), "{key} should be omitted");
        }
        assert!(manifest["icons"][0].get("purpose").is_none());
    }

    #[test]
    fn test_empty_display_falls_back_to_standalone() {
        let mut config = base_config();
        config.display = Some(Display::from(""));
        assert_eq!(generate_manifest(&config)["display"], "standalone");
    }
}
