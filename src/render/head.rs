//! Static `<head>` rendering.
//!
//! [`HeadDescriptor`] is the ordered tag set for one page. Both the static
//! markup ([`HeadDescriptor::to_html`]) and the DOM adapter render from it.
//!
//! Output order:
//!
//! ```text
//! <title>
//! description, keywords, author, robots, viewport, theme-color
//! link[rel=canonical]
//! og:*
//! article:* | product:*
//! twitter:*
//! format-detection..., verification tokens
//! icon links, manifest
//! ```

use crate::config::{IconLink, SiteDefaults};
use crate::seo::{ArticleMeta, ComposedMetadata, KindMeta, ProductMeta};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// `<meta {attr}="{key}" content="{content}">`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

/// `<link rel=".." href=".." [type=".."] [sizes=".."]>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    pub mime: Option<String>,
    pub sizes: Option<String>,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            mime: None,
            sizes: None,
        }
    }

    /// Attributes in output order.
    pub fn attrs(&self) -> Vec<(&'static str, &str)> {
        let mut attrs = vec![("rel", self.rel.as_str())];
        if let Some(mime) = &self.mime {
            attrs.push(("type", mime.as_str()));
        }
        if let Some(sizes) = &self.sizes {
            attrs.push(("sizes", sizes.as_str()));
        }
        attrs.push(("href", self.href.as_str()));
        attrs
    }
}

impl From<&IconLink> for LinkTag {
    fn from(icon: &IconLink) -> Self {
        Self {
            rel: icon.rel.clone(),
            href: icon.href.clone(),
            mime: icon.mime.clone(),
            sizes: icon.sizes.clone(),
        }
    }
}

/// One element of the head tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta(MetaTag),
    Link(LinkTag),
}

impl HeadTag {
    /// `(tag, attr, key)` identifying the element in a document.
    ///
    /// Several tags may share a key (`article:tag`, `format-detection`,
    /// `rel="icon"`); they form one group.
    pub fn key(&self) -> TagKey<'_> {
        match self {
            Self::Meta(meta) => TagKey {
                tag: "meta",
                attr: meta.attr.as_str(),
                value: &meta.key,
            },
            Self::Link(link) => TagKey {
                tag: "link",
                attr: "rel",
                value: &link.rel,
            },
        }
    }

    /// Full attribute list, key attribute first.
    pub fn attrs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Meta(meta) => vec![
                (meta.attr.as_str(), meta.key.as_str()),
                ("content", meta.content.as_str()),
            ],
            Self::Link(link) => link.attrs(),
        }
    }

    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Meta(_) => "meta",
            Self::Link(_) => "link",
        }
    }
}

/// Element selector: `tag[attr="value"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagKey<'a> {
    pub tag: &'static str,
    pub attr: &'static str,
    pub value: &'a str,
}

/// Ordered head tag set for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadDescriptor {
    pub title: String,
    pub tags: Vec<HeadTag>,
}

impl HeadDescriptor {
    /// Build the tag set from composed metadata and fixed site tags.
    pub fn build(meta: &ComposedMetadata, site: &SiteDefaults) -> Self {
        let mut builder = Builder::default();
        let og = &meta.open_graph;
        let twitter = &meta.twitter;

        builder.name("description", &meta.description);
        builder.name("keywords", meta.keywords_content());
        builder.name("author", &meta.author);
        builder.name("robots", meta.robots.content());
        builder.name("viewport", &site.head.viewport);
        builder.name("theme-color", &site.head.theme_color);

        builder.link(LinkTag::new("canonical", &meta.canonical_url));

        builder.property("og:type", og.og_type);
        builder.property("og:title", &og.title);
        builder.property("og:description", &og.description);
        builder.property("og:url", &og.url);
        builder.property("og:site_name", &og.site_name);
        builder.property("og:image", &og.image);
        builder.property("og:image:width", og.image_width.to_string());
        builder.property("og:image:height", og.image_height.to_string());
        builder.property("og:image:alt", &og.image_alt);
        builder.property("og:locale", og.locale);

        match &meta.extension {
            KindMeta::Website => {}
            KindMeta::Article(article) => builder.article(article),
            KindMeta::Product(product) => builder.product(product),
        }

        builder.name("twitter:card", twitter.card);
        builder.name("twitter:title", &twitter.title);
        builder.name("twitter:description", &twitter.description);
        builder.name("twitter:image", &twitter.image);
        builder.name("twitter:creator", &twitter.creator);
        builder.name("twitter:site", &twitter.site);

        for value in &site.head.format_detection {
            builder.name("format-detection", value);
        }
        for (provider, token) in &site.verification {
            builder.name(provider, token);
        }

        for icon in &site.head.icons {
            builder.link(icon.into());
        }
        if let Some(manifest) = &site.head.manifest {
            builder.link(LinkTag::new("manifest", manifest));
        }

        Self {
            title: meta.title.clone(),
            tags: builder.tags,
        }
    }

    /// Meta tag content by key, first match.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.tags.iter().find_map(|tag| match tag {
            HeadTag::Meta(meta) if meta.key == key => Some(meta.content.as_str()),
            _ => None,
        })
    }

    /// Render as HTML, one element per line.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        for tag in &self.tags {
            html.push('<');
            html.push_str(tag.tag_name());
            for (name, value) in tag.attrs() {
                let _ = write!(html, " {}=\"{}\"", name, escape_attr(value));
            }
            html.push_str(">\n");
        }
        html
    }
}

/// Renders composed metadata as static head markup.
#[derive(Debug, Clone, Copy)]
pub struct StaticHeadAdapter<'a> {
    site: &'a SiteDefaults,
}

impl<'a> StaticHeadAdapter<'a> {
    pub fn new(site: &'a SiteDefaults) -> Self {
        Self { site }
    }

    pub fn descriptor(&self, meta: &ComposedMetadata) -> HeadDescriptor {
        HeadDescriptor::build(meta, self.site)
    }

    pub fn render(&self, meta: &ComposedMetadata) -> String {
        self.descriptor(meta).to_html()
    }
}

#[derive(Default)]
struct Builder {
    tags: Vec<HeadTag>,
}

impl Builder {
    fn meta(&mut self, attr: MetaAttr, key: &str, content: impl Into<String>) {
        self.tags.push(HeadTag::Meta(MetaTag {
            attr,
            key: key.to_string(),
            content: content.into(),
        }));
    }

    fn name(&mut self, key: &str, content: impl Into<String>) {
        self.meta(MetaAttr::Name, key, content);
    }

    fn property(&mut self, key: &str, content: impl Into<String>) {
        self.meta(MetaAttr::Property, key, content);
    }

    fn link(&mut self, link: LinkTag) {
        self.tags.push(HeadTag::Link(link));
    }

    fn article(&mut self, article: &ArticleMeta) {
        self.property("article:author", &article.author);
        if let Some(time) = &article.published_time {
            self.property("article:published_time", time);
        }
        if let Some(time) = &article.modified_time {
            self.property("article:modified_time", time);
        }
        if let Some(section) = &article.section {
            self.property("article:section", section);
        }
        for tag in &article.tags {
            self.property("article:tag", tag);
        }
    }

    fn product(&mut self, product: &ProductMeta) {
        if let Some(price) = &product.price {
            self.property("product:price:amount", price);
        }
        self.property("product:price:currency", &product.currency);
        self.property("product:availability", product.availability.og_value());
        self.property("product:brand", &product.brand);
        self.property("product:category", &product.category);
    }
}

/// Every kind-specific key, for removing leftovers of another page kind.
pub const KIND_KEYS: [&str; 10] = [
    "article:author",
    "article:published_time",
    "article:modified_time",
    "article:section",
    "article:tag",
    "product:price:amount",
    "product:price:currency",
    "product:availability",
    "product:brand",
    "product:category",
];

/// Site-level keys a previous [`SiteDefaults`] may have left in a head.
pub const SITE_KEYS: [TagKey<'static>; 7] = [
    site_key("format-detection"),
    site_key("google-site-verification"),
    site_key("yandex-verification"),
    site_key("msvalidate.01"),
    site_key("baidu-site-verification"),
    site_key("facebook-domain-verification"),
    site_key("p:domain_verify"),
];

const fn site_key(value: &'static str) -> TagKey<'static> {
    TagKey {
        tag: "meta",
        attr: "name",
        value,
    }
}
