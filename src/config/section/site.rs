//! `[site]` section: site-wide fallback values.
//!
//! Every page-level value the resolver leaves unset is filled in from here.
//! The struct is built once at startup and handed by reference to the
//! resolver, the composer and the render adapters.

use super::{HeadDefaults, SchemaDefaults};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder every title template must contain.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Site metadata defaults (`[site]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    /// Brand appended to every page title.
    pub brand_name: String,

    /// Title used when a page supplies none. Already contains the brand.
    pub default_title: String,

    /// Page title template, `%s` is replaced by the page title.
    /// Unset means `"%s | <brand_name>"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,

    pub default_description: String,

    /// Appended after page keywords, in this order.
    pub default_keywords: Vec<String>,

    /// Absolute site URL, canonical URLs are built from it.
    pub base_url: String,

    pub default_og_image: String,
    pub default_twitter_image: String,

    /// Author for pages and articles that name none.
    pub default_author: String,

    /// Social profiles and handles.
    pub social: SocialConfig,

    /// Search-engine verification tokens, keyed by meta `name`
    /// (e.g. `google-site-verification`).
    pub verification: BTreeMap<String, String>,

    /// Static `<head>` tags that never vary per page.
    pub head: HeadDefaults,

    /// Organization and software facts for structured data.
    pub schema: SchemaDefaults,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self {
            brand_name: "Light SaaS".into(),
            default_title:
                "Light SaaS - Boost Your Productivity | Task Management & Project Tracking".into(),
            title_template: None,
            default_description: "Streamline your workflow and boost productivity with Light SaaS. \
                AI-powered task management, project tracking, and team collaboration tools. \
                Free forever plan available."
                .into(),
            default_keywords: [
                "productivity app",
                "task management",
                "project tracking",
                "team collaboration",
                "workflow automation",
                "SaaS productivity",
                "project management software",
                "team productivity tools",
            ]
            .map(String::from)
            .to_vec(),
            base_url: "https://light-saas.com".into(),
            default_og_image: "/og-image.jpg".into(),
            default_twitter_image: "/twitter-image.jpg".into(),
            default_author: "Light SaaS Team".into(),
            social: SocialConfig::default(),
            verification: BTreeMap::from([
                (
                    "google-site-verification".to_string(),
                    "your-google-verification-code".to_string(),
                ),
                (
                    "yandex-verification".to_string(),
                    "your-yandex-verification-code".to_string(),
                ),
            ]),
            head: HeadDefaults::default(),
            schema: SchemaDefaults::default(),
        }
    }
}

impl SiteDefaults {
    pub const FIELD_BRAND_NAME: FieldPath = FieldPath::new("site.brand_name");
    pub const FIELD_DEFAULT_TITLE: FieldPath = FieldPath::new("site.default_title");
    pub const FIELD_TITLE_TEMPLATE: FieldPath = FieldPath::new("site.title_template");
    pub const FIELD_BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Apply the title template to a page title.
    pub fn page_title(&self, title: &str) -> String {
        match &self.title_template {
            Some(template) => template.replacen(TITLE_PLACEHOLDER, title, 1),
            None => format!("{title} | {}", self.brand_name),
        }
    }

    /// Base URL without a trailing slash.
    #[inline]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Make a site-relative path absolute. Absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        crate::core::url::join(&self.base_url, path)
    }

    /// Validate site defaults.
    ///
    /// # Checks
    /// - `brand_name` and `default_title` are not empty
    /// - `title_template`, when set, contains `%s`
    /// - `base_url` is an absolute http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.brand_name.trim().is_empty() {
            diag.error(Self::FIELD_BRAND_NAME, "brand name must not be empty");
        }

        if self.default_title.trim().is_empty() {
            diag.error(Self::FIELD_DEFAULT_TITLE, "default title must not be empty");
        }

        if let Some(template) = &self.title_template
            && !template.contains(TITLE_PLACEHOLDER)
        {
            diag.error_with_hint(
                Self::FIELD_TITLE_TEMPLATE,
                format!("template `{template}` has no `%s` placeholder"),
                format!("use format like \"%s | {}\"", self.brand_name),
            );
        }

        match url::Url::parse(&self.base_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELD_BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELD_BASE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELD_BASE_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

/// Social handles (`[site.social]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// `twitter:creator` handle.
    pub twitter_creator: String,
    /// `twitter:site` handle.
    pub twitter_site: String,
    /// Profile URLs, emitted as `sameAs` in organization data.
    pub profiles: Vec<String>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            twitter_creator: "@lightsaas".into(),
            twitter_site: "@lightsaas".into(),
            profiles: vec![
                "https://twitter.com/lightsaas".into(),
                "https://linkedin.com/company/lightsaas".into(),
                "https://github.com/lightsaas".into(),
            ],
        }
    }
}
