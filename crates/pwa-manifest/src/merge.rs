//! Manifest reconciliation
//!
//! Folds a freshly generated manifest into whatever manifest already exists
//! on disk. Only the members this tool owns are overwritten; everything else
//! (shortcuts, screenshots, vendor extensions) is carried over as-is.

use serde_json::Value;

use crate::types::ManifestDocument;

/// Manifest members owned by this tool, in reporting order
pub const APP_SPECIFIC_FIELDS: &[&str] = &[
    "name",
    "short_name",
    "description",
    "start_url",
    "display",
    "theme_color",
    "background_color",
    "icons",
];

/// Whether `key` is one of the owned members
pub fn is_app_specific(key: &str) -> bool {
    APP_SPECIFIC_FIELDS.contains(&key)
}

/// Merge `fresh` into a copy of `existing`.
///
/// Owned keys present in `fresh` replace (or are appended to) the copy; keys
/// of `fresh` outside the owned set are dropped. `icons` is replaced as a
/// whole, never merged per entry. Existing keys keep their position.
pub fn merge_manifest(existing: &ManifestDocument, fresh: &ManifestDocument) -> ManifestDocument {
    let mut merged = existing.clone();

    for (key, value) in fresh {
        if is_app_specific(key) {
            merged.insert(key.clone(), value.clone());
        }
    }

    if let Some(icons) = fresh.get("icons") {
        merged.insert("icons".to_string(), icons.clone());
    }

    merged
}

/// Owned member names, for logging what a merge may touch
pub fn app_specific_fields() -> Vec<&'static str> {
    APP_SPECIFIC_FIELDS.to_vec()
}

/// Top-level keys of `merged` that are new or differ from `existing`,
/// in `merged` order
pub fn changed_fields(existing: &ManifestDocument, merged: &ManifestDocument) -> Vec<String> {
    merged
        .iter()
        .filter(|(key, value)| existing.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect()
}

/// Interpret a parsed JSON value as a manifest document, if it is an object
pub fn as_document(value: Value) -> Option<ManifestDocument> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
