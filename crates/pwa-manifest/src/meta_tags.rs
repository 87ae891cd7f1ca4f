//! PWA `<head>` tag projection
//!
//! Produces framework-agnostic tag descriptors from a [`MetaTagsConfig`], plus
//! a markup renderer and a structured links/meta split.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::types::{MetaTagsConfig, StatusBarStyle};

const DEFAULT_STATUS_BAR_STYLE: &str = "black-translucent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Link,
    Meta,
}

impl TagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TagKind::Link => "link",
            TagKind::Meta => "meta",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<link>` or `<meta>` element with attributes in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagDescriptor {
    pub tag: TagKind,
    #[serde(serialize_with = "serialize_attributes")]
    pub attributes: Vec<(String, String)>,
}

impl MetaTagDescriptor {
    fn new(tag: TagKind, attributes: &[(&str, &str)]) -> Self {
        MetaTagDescriptor {
            tag,
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    fn meta(name: &str, content: &str) -> Self {
        Self::new(TagKind::Meta, &[("name", name), ("content", content)])
    }

    /// Value of the first attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Render as a self-closing element
    pub fn to_markup(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", key, escape_attribute(value)));
        }
        out.push_str(" />");
        out
    }
}

fn serialize_attributes<S>(attributes: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(attributes.len()))?;
    for (key, value) in attributes {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Project `config` onto the ordered list of PWA head tags.
///
/// Order: manifest link, theme-color, the two always-present Apple capability
/// tags, the Apple title, then touch icons in input order.
pub fn generate_meta_tags(config: &MetaTagsConfig) -> Vec<MetaTagDescriptor> {
    let mut tags = Vec::new();

    if let Some(path) = present(config.manifest_path.as_deref()) {
        tags.push(MetaTagDescriptor::new(
            TagKind::Link,
            &[("rel", "manifest"), ("href", path)],
        ));
    }

    if let Some(color) = present(config.theme_color.as_deref()) {
        tags.push(MetaTagDescriptor::meta("theme-color", color));
    }

    let capable = if config.apple_mobile_web_app_capable == Some(false) {
        "no"
    } else {
        "yes"
    };
    tags.push(MetaTagDescriptor::meta("apple-mobile-web-app-capable", capable));

    let style = config
        .apple_mobile_web_app_status_bar_style
        .as_ref()
        .map_or(DEFAULT_STATUS_BAR_STYLE, StatusBarStyle::as_str);
    tags.push(MetaTagDescriptor::meta(
        "apple-mobile-web-app-status-bar-style",
        style,
    ));

    if let Some(title) = present(config.apple_mobile_web_app_title.as_deref()) {
        tags.push(MetaTagDescriptor::meta("apple-mobile-web-app-title", title));
    }

    for icon in &config.apple_touch_icons {
        let mut tag = MetaTagDescriptor::new(
            TagKind::Link,
            &[("rel", "apple-touch-icon"), ("href", icon.href.as_str())],
        );
        if let Some(sizes) = present(icon.sizes.as_deref()) {
            tag.attributes.push(("sizes".to_string(), sizes.to_string()));
        }
        tags.push(tag);
    }

    tags
}

// Empty strings count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Render descriptors as markup, one self-closing element per line
pub fn meta_tags_to_html(tags: &[MetaTagDescriptor]) -> String {
    tags.iter()
        .map(MetaTagDescriptor::to_markup)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// Tags split into links and metas, for head managers that take data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTagsObject {
    pub links: Vec<LinkTag>,
    pub meta: Vec<MetaTag>,
}

pub fn meta_tags_object(config: &MetaTagsConfig) -> MetaTagsObject {
    let mut object = MetaTagsObject::default();

    for tag in generate_meta_tags(config) {
        match tag.tag {
            TagKind::Link => object.links.push(LinkTag {
                rel: tag.attribute("rel").unwrap_or_default().to_string(),
                href: tag.attribute("href").unwrap_or_default().to_string(),
                sizes: tag.attribute("sizes").map(str::to_string),
            }),
            TagKind::Meta => object.meta.push(MetaTag {
                name: tag.attribute("name").unwrap_or_default().to_string(),
                content: tag.attribute("content").unwrap_or_default().to_string(),
            }),
        }
    }

    object
}
