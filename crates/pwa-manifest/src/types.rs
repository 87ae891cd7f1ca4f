//! Canonical manifest configuration types
//!
//! These mirror the web app manifest members this tool knows how to produce.
//! Enumerated members keep a `Custom` arm so values outside the known set
//! pass through generation untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated or persisted manifest: an insertion-ordered JSON object.
pub type ManifestDocument = serde_json::Map<String, serde_json::Value>;

/// Engine-agnostic description of a web app manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
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
}

impl ManifestConfig {
    /// Config with the four required members set and everything else absent
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        description: impl Into<String>,
        start_url: impl Into<String>,
    ) -> Self {
        ManifestConfig {
            name: name.into(),
            short_name: short_name.into(),
            description: description.into(),
            start_url: start_url.into(),
            display: None,
            background_color: None,
            theme_color: None,
            orientation: None,
            icons: Vec::new(),
            categories: None,
            lang: None,
            dir: None,
        }
    }
}

/// A single entry of the manifest `icons` array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl IconEntry {
    pub fn new(src: impl Into<String>, sizes: impl Into<String>, mime_type: impl Into<String>) -> Self {
        IconEntry {
            src: src.into(),
            sizes: sizes.into(),
            mime_type: mime_type.into(),
            purpose: None,
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }
}

/// Declares a string-backed enum with a catch-all `Custom` arm.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Custom(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Custom(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Custom(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Custom(value) => value,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Preferred display mode
    Display {
        Standalone => "standalone",
        Fullscreen => "fullscreen",
        MinimalUi => "minimal-ui",
        Browser => "browser",
    }
}

string_enum! {
    /// Default screen orientation
    Orientation {
        Portrait => "portrait",
        Landscape => "landscape",
        Any => "any",
    }
}

string_enum! {
    /// Base text direction of the manifest's localizable members
    TextDirection {
        Ltr => "ltr",
        Rtl => "rtl",
    }
}

string_enum! {
    /// Value of `apple-mobile-web-app-status-bar-style`
    StatusBarStyle {
        Default => "default",
        Black => "black",
        BlackTranslucent => "black-translucent",
    }
}

/// An `apple-touch-icon` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppleTouchIcon {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Inputs for the PWA `<head>` tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_mobile_web_app_capable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_mobile_web_app_status_bar_style: Option<StatusBarStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_mobile_web_app_title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apple_touch_icons: Vec<AppleTouchIcon>,
}
