//! Composed metadata record.
//!
//! Everything the render adapters need, fully resolved: no field here falls
//! back to anything at render time.

use crate::page::Availability;
use serde::Serialize;

/// Fully merged metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedMetadata {
    /// Final document title, template already applied.
    pub title: String,
    /// Page title without the brand suffix.
    pub headline: String,
    pub description: String,
    /// Page keywords first, then site keywords, without duplicates.
    pub keywords: Vec<String>,
    /// Absolute canonical URL.
    pub canonical_url: String,
    pub robots: Robots,
    pub author: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub extension: KindMeta,
}

impl ComposedMetadata {
    /// Keywords joined for the `keywords` meta tag.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Crawler directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// Both directives from a single `no_index` flag.
    pub const fn from_no_index(no_index: bool) -> Self {
        Self {
            index: !no_index,
            follow: !no_index,
        }
    }

    /// Value of the `robots` meta tag.
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index},{follow}")
    }
}

/// `og:*` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
    pub locale: &'static str,
}

/// `twitter:*` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    pub creator: String,
    pub site: String,
}

/// Kind-specific extension. Exactly one variant, matching the page kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KindMeta {
    Website,
    Article(ArticleMeta),
    Product(ProductMeta),
}

impl KindMeta {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article(_) => "article",
            Self::Product(_) => "product",
        }
    }
}

/// `article:*` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleMeta {
    pub author: String,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub section: Option<String>,
    pub tags: Vec<String>,
}

/// `product:*` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductMeta {
    pub price: Option<String>,
    pub currency: String,
    pub availability: Availability,
    pub brand: String,
    pub category: String,
}
