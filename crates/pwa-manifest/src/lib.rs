//! PWA manifest management
//!
//! Generates web app manifests from a typed configuration, reconciles them
//! with a manifest that already exists on disk, and projects the matching
//! `<head>` tags.
//!
//! Generation, merging and tag projection are pure functions. File access
//! lives in [`manifest_writer`].

pub mod errors;
pub mod generate;
pub mod manifest_writer;
pub mod merge;
pub mod meta_tags;
pub mod types;

pub use errors::ManifestError;
pub use generate::generate_manifest;
pub use merge::{app_specific_fields, changed_fields, merge_manifest, APP_SPECIFIC_FIELDS};
pub use meta_tags::{
    generate_meta_tags, meta_tags_object, meta_tags_to_html, MetaTagDescriptor, MetaTagsObject,
    TagKind,
};
pub use types::{
    AppleTouchIcon, Display, IconEntry, ManifestConfig, ManifestDocument, MetaTagsConfig,
    Orientation, StatusBarStyle, TextDirection,
};

// Re-export manifest writer utilities for custom paths
pub use manifest_writer::{read_from_path, write_to_path};
