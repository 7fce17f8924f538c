//! Generated site files.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}
