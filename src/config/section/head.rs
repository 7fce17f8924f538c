//! `[site.head]` section: static `<head>` tags.

use serde::{Deserialize, Serialize};

/// Tags emitted on every page regardless of the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadDefaults {
    pub viewport: String,
    pub theme_color: String,
    /// One `format-detection` meta per entry, e.g. `telephone=no`.
    pub format_detection: Vec<String>,
    /// Favicon and touch icon links, in output order.
    pub icons: Vec<IconLink>,
    /// Web app manifest path.
    pub manifest: Option<String>,
}

impl Default for HeadDefaults {
    fn default() -> Self {
        Self {
            viewport: "width=device-width, initial-scale=1".into(),
            theme_color: "#183EC2".into(),
            format_detection: vec![
                "telephone=no".into(),
                "address=no".into(),
                "email=no".into(),
            ],
            icons: vec![
                IconLink::new("icon", "/favicon.ico"),
                IconLink::new("apple-touch-icon", "/apple-touch-icon.png").with_sizes("180x180"),
                IconLink::new("icon", "/favicon-32x32.png")
                    .with_type("image/png")
                    .with_sizes("32x32"),
                IconLink::new("icon", "/favicon-16x16.png")
                    .with_type("image/png")
                    .with_sizes("16x16"),
            ],
            manifest: Some("/site.webmanifest".into()),
        }
    }
}

/// A `<link>` to an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    pub rel: String,
    pub href: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

impl IconLink {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            mime: None,
            sizes: None,
        }
    }

    pub fn with_type(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }
}
