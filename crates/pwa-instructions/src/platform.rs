//! Platform tags and detection
//!
//! Install flows differ per browser/OS pair. Callers may hand us any string,
//! so raw tags are parsed into [`PlatformTag`] which keeps an explicit arm
//! for values outside the known set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platforms with a distinct install flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    MacosSafari,
    Android,
    Desktop,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Ios,
        Platform::MacosSafari,
        Platform::Android,
        Platform::Desktop,
        Platform::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::MacosSafari => "macos_safari",
            Platform::Android => "android",
            Platform::Desktop => "desktop",
            Platform::Other => "other",
        }
    }

    /// Parse one of the five known tags
    pub fn from_tag(tag: &str) -> Option<Self> {
        Platform::ALL.into_iter().find(|p| p.as_str() == tag)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied platform tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformTag {
    Known(Platform),
    Unrecognized(String),
}

impl From<Platform> for PlatformTag {
    fn from(platform: Platform) -> Self {
        PlatformTag::Known(platform)
    }
}

impl From<&str> for PlatformTag {
    fn from(tag: &str) -> Self {
        Platform::from_tag(tag).map_or_else(|| PlatformTag::Unrecognized(tag.to_string()), PlatformTag::Known)
    }
}

impl FromStr for PlatformTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlatformTag::from(s))
    }
}

/// Guess the install flow from a browser user-agent string.
///
/// iOS wins over everything, then Safari on macOS, then Android. Any other
/// non-empty user agent is treated as a desktop browser.
pub fn detect_platform(user_agent: &str) -> Platform {
    let ua = user_agent.to_lowercase();
    if ua.trim().is_empty() {
        return Platform::Other;
    }

    let is_ios = ["iphone", "ipad", "ipod"].iter().any(|t| ua.contains(t));
    let is_android = ua.contains("android");
    let is_mac = ua.contains("macintosh") || ua.contains("mac os x");
    let is_safari = ua.contains("safari") && !ua.contains("chrome");

    if is_ios {
        Platform::Ios
    } else if is_mac && is_safari {
        Platform::MacosSafari
    } else if is_android {
        Platform::Android
    } else {
        Platform::Desktop
    }
}

/// Browser-reported signals that the app runs as an installed PWA
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallSignals {
    /// `(display-mode: standalone)` media query matched
    pub display_mode_standalone: bool,
    /// iOS Safari `navigator.standalone`
    pub navigator_standalone: bool,
}

impl InstallSignals {
    pub fn is_installed(&self) -> bool {
        self.display_mode_standalone || self.navigator_standalone
    }
}
