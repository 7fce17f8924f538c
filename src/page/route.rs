//! Path resolution: request path (+ entity data) -> [`PageIntent`].
//!
//! Resolution order:
//!
//! 1. exact match against the static route table
//! 2. section prefixes, first match wins:
//!    `/blog/<slug>`, `/features/<name>`, `/pricing/<plan>`, `/products/<name>`
//! 3. generic fallback
//!
//! Resolution is total: every string, including `""` and paths without a
//! leading slash, yields an intent. Literals may contain `{brand}`, which is
//! replaced with the configured brand name.

use super::entity::EntityData;
use super::intent::PageIntent;
use super::kind::{ArticleIntent, Availability, DEFAULT_CURRENCY, PageKind, ProductIntent};
use crate::config::SiteDefaults;
use crate::core::RequestPath;
use crate::core::url::encode_path;
use crate::debug;
use crate::utils::text::{humanize, title_case};

/// Brand placeholder inside route literals.
const BRAND: &str = "{brand}";

// =============================================================================
// Static routes
// =============================================================================

/// A canned page with fixed metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticRoute {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_image: &'static str,
}

/// Known static pages of the marketing site.
pub const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        title: "{brand} - Boost Your Productivity",
        description: "Streamline your workflow and boost productivity with {brand}. \
            AI-powered task management, project tracking, and team collaboration tools.",
        keywords: &[
            "productivity app",
            "task management",
            "project tracking",
            "team collaboration",
        ],
        og_image: "/home-og.jpg",
    },
    StaticRoute {
        path: "/pricing",
        title: "Pricing Plans - Choose Your Perfect Plan",
        description: "Compare our pricing plans and choose the perfect one for your team. \
            Free forever plan available with no credit card required.",
        keywords: &["pricing", "plans", "subscription", "free trial"],
        og_image: "/pricing-og.jpg",
    },
    StaticRoute {
        path: "/features",
        title: "Features - Powerful Tools for Your Team",
        description: "Discover all the powerful features that make {brand} the perfect \
            choice for your team productivity needs.",
        keywords: &[
            "features",
            "productivity tools",
            "team collaboration",
            "workflow automation",
        ],
        og_image: "/features-og.jpg",
    },
    StaticRoute {
        path: "/about",
        title: "About Us - Meet the {brand} Team",
        description: "Learn about our mission to revolutionize team productivity and meet \
            the passionate team behind {brand}.",
        keywords: &["about us", "team", "mission", "company"],
        og_image: "/about-og.jpg",
    },
    StaticRoute {
        path: "/help",
        title: "Help Center - Get Support & Learn",
        description: "Find answers to common questions, learn how to use {brand} \
            effectively, and get the support you need.",
        keywords: &["help", "support", "documentation", "tutorials"],
        og_image: "/help-og.jpg",
    },
    StaticRoute {
        path: "/blog",
        title: "Blog - Productivity Tips & Insights",
        description: "Read our latest articles on productivity, task management, and team \
            collaboration to boost your workflow.",
        keywords: &["blog", "productivity tips", "insights", "articles"],
        og_image: "/blog-og.jpg",
    },
];

/// Used for every path nothing else matches.
pub const FALLBACK_ROUTE: StaticRoute = StaticRoute {
    path: "",
    title: "{brand} - Productivity Platform",
    description: "Boost your team productivity with {brand}. \
        AI-powered task management and collaboration tools.",
    keywords: &["productivity", "task management", "team collaboration"],
    og_image: "/default-og.jpg",
};

impl StaticRoute {
    /// Look up an exact static path.
    pub fn find(path: &str) -> Option<&'static StaticRoute> {
        STATIC_ROUTES.iter().find(|route| route.path == path)
    }

    /// Website intent for this route at `canonical_path`.
    fn to_intent(&self, canonical_path: String, brand: &str) -> PageIntent {
        PageIntent::website(canonical_path)
            .with_title(brand_text(self.title, brand))
            .with_description(brand_text(self.description, brand))
            .with_keywords(self.keywords.iter().copied())
            .with_og_image(self.og_image)
    }
}

#[inline]
fn brand_text(text: &str, brand: &str) -> String {
    text.replace(BRAND, brand)
}

// =============================================================================
// Resolver
// =============================================================================

/// Maps request paths to page intents for one site.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    site: &'a SiteDefaults,
}

impl<'a> PathResolver<'a> {
    pub fn new(site: &'a SiteDefaults) -> Self {
        Self { site }
    }

    /// Resolve `path` with optional entity data.
    pub fn resolve(&self, path: &str, entity: Option<&EntityData>) -> PageIntent {
        let request = RequestPath::parse(path);
        let intent = self.resolve_request(&request, entity);

        debug!("resolve"; "{:?} -> {} {}", path, intent.kind.name(), intent.canonical_path);

        match entity.and_then(|e| e.flag("noIndex")) {
            Some(no_index) => intent.with_no_index(no_index),
            None => intent,
        }
    }

    fn resolve_request(&self, request: &RequestPath, entity: Option<&EntityData>) -> PageIntent {
        let brand = self.site.brand_name.as_str();

        if !request.is_rooted() {
            return FALLBACK_ROUTE.to_intent(request.to_canonical(), brand);
        }

        if let Some(route) = StaticRoute::find(request.as_str()) {
            return route.to_intent(route.path.to_string(), brand);
        }

        if let Some(slug) = request.strip_section("/blog/") {
            return blog_post(slug, entity);
        }
        if let Some(name) = request.strip_section("/features/") {
            return feature(name);
        }
        if let Some(plan) = request.strip_section("/pricing/") {
            return pricing_plan(plan);
        }
        if let Some(name) = request.strip_section("/products/") {
            return product(name, entity);
        }

        FALLBACK_ROUTE.to_intent(request.to_canonical(), brand)
    }
}

/// Resolve with the given site defaults. Shorthand for
/// `PathResolver::new(site).resolve(path, entity)`.
pub fn resolve(path: &str, entity: Option<&EntityData>, site: &SiteDefaults) -> PageIntent {
    PathResolver::new(site).resolve(path, entity)
}

// =============================================================================
// Dynamic sections
// =============================================================================

/// `/blog/<slug>`: article. Entity fields override generated values one by one.
fn blog_post(slug: &str, entity: Option<&EntityData>) -> PageIntent {
    let words = humanize(slug);
    let path = format!("/blog/{}", encode_path(slug));
    let field = |key: &str| entity.and_then(|e| e.text(key));
    let tags = entity.and_then(|e| e.list("tags"));

    let article = ArticleIntent {
        author: field("author"),
        published_time: field("publishedAt"),
        modified_time: field("updatedAt"),
        category: field("category"),
        tags: tags.clone().unwrap_or_default(),
    };

    let keywords = tags.unwrap_or_else(|| {
        vec![
            "blog".into(),
            "productivity".into(),
            "tips".into(),
            words.clone(),
        ]
    });

    PageIntent::website(path.clone())
        .with_kind(PageKind::Article(article))
        .with_title(field("title").unwrap_or_else(|| title_case(slug)))
        .with_description(field("excerpt").unwrap_or_else(|| {
            format!("Read our latest blog post about {words} and learn valuable productivity tips.")
        }))
        .with_keywords(keywords)
        .with_og_image(field("featuredImage").unwrap_or_else(|| format!("{path}-og.jpg")))
}

/// `/features/<name>`: website page for a single feature.
fn feature(name: &str) -> PageIntent {
    let words = humanize(name);
    let path = format!("/features/{}", encode_path(name));
    PageIntent::website(path.clone())
        .with_title(format!("Feature: {}", title_case(name)))
        .with_description(format!(
            "Learn about our {words} feature and how it can improve your team's productivity."
        ))
        .with_keywords(["features".to_string(), "productivity".to_string(), words])
        .with_og_image(format!("{path}-og.jpg"))
}

/// `/pricing/<plan>`: website page for a single plan.
fn pricing_plan(plan: &str) -> PageIntent {
    let words = humanize(plan);
    let path = format!("/pricing/{}", encode_path(plan));
    PageIntent::website(path.clone())
        .with_title(format!("Pricing: {} Plan", title_case(plan)))
        .with_description(format!(
            "Learn about our {words} pricing plan and what features are included."
        ))
        .with_keywords(["pricing".to_string(), "plans".to_string(), words])
        .with_og_image(format!("{path}-og.jpg"))
}

/// `/products/<name>`: product page, priced from entity data when present.
fn product(name: &str, entity: Option<&EntityData>) -> PageIntent {
    let words = humanize(name);
    let path = format!("/products/{}", encode_path(name));
    let field = |key: &str| entity.and_then(|e| e.text(key));

    let product = ProductIntent {
        price: entity.and_then(|e| e.scalar("price")),
        currency: field("currency").unwrap_or_else(|| DEFAULT_CURRENCY.into()),
        availability: availability(entity),
        brand: field("brand"),
        category: field("category"),
    };

    PageIntent::website(path.clone())
        .with_kind(PageKind::Product(product))
        .with_title(field("name").unwrap_or_else(|| title_case(name)))
        .with_description(
            field("description").unwrap_or_else(|| format!("Learn about our {words} product")),
        )
        .with_keywords(
            entity
                .and_then(|e| e.list("categories"))
                .unwrap_or_else(|| vec!["product".into(), "software".into()]),
        )
        .with_og_image(field("image").unwrap_or_else(|| format!("{path}-og.jpg")))
}

/// `availability` string, then `inStock` flag, then in stock.
fn availability(entity: Option<&EntityData>) -> Availability {
    let Some(entity) = entity else {
        return Availability::default();
    };

    if let Some(text) = entity.text("availability") {
        match text.parse() {
            Ok(value) => return value,
            Err(e) => debug!("resolve"; "{}, falling back to `inStock`", e),
        }
    }

    entity
        .flag("inStock")
        .map(Availability::from_flag)
        .unwrap_or_default()
}
