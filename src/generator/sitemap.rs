//! Sitemap generation.
//!
//! Lists the static routes plus any configured extra paths. Every path goes
//! through the resolver, and pages resolved as `noindex` are left out.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://light-saas.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::config::{SiteDefaults, SitemapConfig};
use crate::core::url;
use crate::generator::minify_xml;
use crate::page::{PathResolver, STATIC_ROUTES};
use crate::{debug, log};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap and write it to `output`.
pub fn write_sitemap(site: &SiteDefaults, config: &SitemapConfig, output: &Path) -> Result<()> {
    let sitemap = Sitemap::build(site, config);
    let count = sitemap.urls.len();
    let xml = sitemap.into_xml();
    let xml = minify_xml(&xml, config.minify);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, xml.as_bytes())
        .with_context(|| format!("Failed to write sitemap to {}", output.display()))?;

    log!("sitemap"; "{} ({} urls)", output.display(), count);
    Ok(())
}

/// Sitemap XML as a string.
pub fn render_sitemap(site: &SiteDefaults, config: &SitemapConfig) -> String {
    let xml = Sitemap::build(site, config).into_xml();
    minify_xml(&xml, config.minify).into_owned()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(site: &SiteDefaults, config: &SitemapConfig) -> Self {
        let resolver = PathResolver::new(site);
        let paths = STATIC_ROUTES
            .iter()
            .map(|route| route.path)
            .chain(config.paths.iter().map(String::as_str));

        let mut seen = FxHashSet::default();
        let mut urls = Vec::new();
        for path in paths {
            let intent = resolver.resolve(path, None);
            if intent.no_index {
                debug!("sitemap"; "skipping noindex {}", path);
                continue;
            }
            if !seen.insert(intent.canonical_path.clone()) {
                continue;
            }
            urls.push(UrlEntry {
                loc: url::join(&site.base_url, &intent.canonical_path),
                lastmod: config.lastmod.clone(),
            });
        }

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
