//! `[sitemap]` section.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path used by `lumen sitemap` when `--output` is not given.
    pub path: PathBuf,
    /// `<lastmod>` written for every entry, if set.
    pub lastmod: Option<String>,
    /// Extra site paths listed after the static routes, e.g. blog posts.
    pub paths: Vec<String>,
    /// Strip indentation and newlines from the output.
    pub minify: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            lastmod: None,
            paths: Vec::new(),
            minify: false,
        }
    }
}
