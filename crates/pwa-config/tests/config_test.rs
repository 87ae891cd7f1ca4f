use pwa_config::{config_path, find_project_root, ConfigError, PwaConfig};
use pwa_manifest::{generate_manifest, generate_meta_tags};
use std::fs;
use tempfile::TempDir;

const CONFIG_WITH_COMMENTS: &str = r##"{
  // Shown on the splash screen
  "name": "Field Notes",
  "shortName": "Notes",
  "description": "Offline notebook",
  "startUrl": "/?source=pwa",
  "themeColor": "#0f172a",
  "orientation": "portrait",
  "categories": ["productivity"],
  "icons": [
    { "src": "/icons/icon-192x192.png", "sizes": "192x192", "type": "image/png" }
  ],
  /* head tags */
  "metaTags": {
    "manifestPath": "/manifest.json",
    "appleMobileWebAppTitle": "Notes",
    "appleTouchIcons": [{ "href": "/icons/apple-touch-icon.png", "sizes": "180x180" }]
  }
}
"##;

#[test]
fn test_load_config_and_generate() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = config_path(temp_dir.path());
    assert!(fs::write(&path, CONFIG_WITH_COMMENTS).is_ok());

    let Ok(config) = PwaConfig::load(&path) else {
        panic!("config with comments should load");
    };

    let manifest = generate_manifest(&config.to_manifest_config());
    assert_eq!(manifest["short_name"], "Notes");
    assert_eq!(manifest["start_url"], "/?source=pwa");
    assert_eq!(manifest["display"], "standalone");
    assert_eq!(manifest["orientation"], "portrait");
    assert_eq!(manifest["categories"][0], "productivity");
    assert!(!manifest.contains_key("background_color"));

    let tags = generate_meta_tags(&config.to_meta_tags_config());
    assert_eq!(tags[0].attribute("href"), Some("/manifest.json"));
    assert_eq!(tags[1].attribute("content"), Some("#0f172a"));
    assert_eq!(tags.last().and_then(|t| t.attribute("sizes")), Some("180x180"));
}

#[test]
fn test_missing_config_is_reported() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let result = PwaConfig::load(&config_path(temp_dir.path()));
    assert!(matches!(result, Err(ConfigError::ConfigNotFound(_))));
}

#[test]
fn test_malformed_config_names_the_file() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = config_path(temp_dir.path());
    assert!(fs::write(&path, "{ \"name\": \"x\" ").is_ok());
    let Err(err) = PwaConfig::load(&path) else {
        panic!("malformed config should fail");
    };
    assert!(err.to_string().contains("pwa.config.json"));
}

#[test]
fn test_template_save_and_reload() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = config_path(temp_dir.path());
    assert!(PwaConfig::template().save(&path).is_ok());
    let reloaded = PwaConfig::load(&path).ok();
    assert_eq!(reloaded, Some(PwaConfig::template()));
}

#[test]
fn test_project_root_not_found() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    // A temp dir normally has no package.json above it
    if temp_dir.path().ancestors().any(|d| d.join("package.json").is_file()) {
        return;
    }
    assert!(matches!(
        find_project_root(temp_dir.path()),
        Err(ConfigError::ProjectRootNotFound(_))
    ));
}
