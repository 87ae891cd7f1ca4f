//! End-to-end reconciliation: generate a manifest and fold it into one on disk

use pwa_manifest::{
    changed_fields, generate_manifest, merge_manifest, read_from_path, write_to_path, IconEntry,
    ManifestConfig, ManifestDocument,
};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn config() -> ManifestConfig {
    let mut config = ManifestConfig::new("New Name", "NewApp", "New description", "/");
    config.theme_color = Some("#7b2dff".to_string());
    config.lang = Some("en".to_string());
    config.icons = vec![
        IconEntry::new("/icons/icon-192x192.png", "192x192", "image/png").with_purpose("any maskable"),
        IconEntry::new("/icons/icon-512x512.png", "512x512", "image/png").with_purpose("any maskable"),
    ];
    config
}

fn existing() -> ManifestDocument {
    match json!({
        "name": "Old Name",
        "shortcuts": [{"name": "Custom Shortcut", "url": "/shortcut"}],
        "categories": ["games"],
        "icons": [{"src": "/old.png", "sizes": "48x48", "type": "image/png"}],
        "x-vendor": {"nested": {"deep": true}}
    }) {
        Value::Object(map) => map,
        _ => ManifestDocument::new(),
    }
}

#[test]
fn test_update_flow_preserves_custom_members() {
    let merged = merge_manifest(&existing(), &generate_manifest(&config()));

    assert_eq!(merged["name"], "New Name");
    assert_eq!(merged["short_name"], "NewApp");
    assert_eq!(merged["theme_color"], "#7b2dff");
    assert_eq!(merged["shortcuts"], existing()["shortcuts"]);
    assert_eq!(merged["categories"], json!(["games"]));
    assert_eq!(merged["x-vendor"], json!({"nested": {"deep": true}}));
    // lang is generated but not owned, so it does not leak into the merge
    assert!(!merged.contains_key("lang"));

    let icons = merged["icons"].as_array().map(Vec::len).unwrap_or_default();
    assert_eq!(icons, 2);
}

#[test]
fn test_merge_is_stable_for_identical_inputs() {
    let fresh = generate_manifest(&config());
    let first = serde_json::to_string_pretty(&merge_manifest(&existing(), &fresh)).unwrap_or_default();
    let second = serde_json::to_string_pretty(&merge_manifest(&existing(), &fresh)).unwrap_or_default();
    assert_eq!(first, second);
}

#[test]
fn test_second_update_changes_nothing() {
    let fresh = generate_manifest(&config());
    let once = merge_manifest(&existing(), &fresh);
    let twice = merge_manifest(&once, &fresh);
    assert!(changed_fields(&once, &twice).is_empty());
}

#[test]
fn test_file_round_trip_with_comments() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let path = temp_dir.path().join("manifest.webmanifest");
    let with_comments = "{\n  // kept by hand\n  \"id\": \"/\",\n  \"name\": \"Old\"\n}\n";
    assert!(fs::write(&path, with_comments).is_ok());

    let Ok(current) = read_from_path(&path) else {
        panic!("manifest with comments should parse");
    };
    let merged = merge_manifest(&current, &generate_manifest(&config()));
    assert!(write_to_path(&merged, &path).is_ok());

    let written = fs::read_to_string(&path).unwrap_or_default();
    assert!(written.starts_with("{\n  \"id\": \"/\",\n  \"name\": \"New Name\""));
    assert!(written.ends_with("}\n"));
}
