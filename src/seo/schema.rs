//! schema.org JSON-LD documents.
//!
//! Each [`SchemaKind`] has one canonical document shape built from
//! [`SiteDefaults`]. For `faq`, `breadcrumb`, `product` and `article` a
//! caller payload replaces the sample content verbatim:
//!
//! | kind           | payload replaces              |
//! |----------------|-------------------------------|
//! | `software`     | (ignored)                     |
//! | `organization` | (ignored)                     |
//! | `faq`          | `mainEntity`                  |
//! | `breadcrumb`   | `itemListElement`             |
//! | `product`      | whole document                |
//! | `article`      | whole document                |
//! | unknown        | whole document, else `{}`     |

use super::meta::{ComposedMetadata, KindMeta};
use crate::config::SiteDefaults;
use crate::page::Availability;
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;

const CONTEXT: &str = "https://schema.org";

/// Structured data document type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Software,
    Organization,
    Faq,
    Breadcrumb,
    Product,
    Article,
    /// Any other name, kept for diagnostics.
    Unknown(String),
}

impl SchemaKind {
    /// Every documented kind, in display order.
    pub const KNOWN: [SchemaKind; 6] = [
        Self::Software,
        Self::Organization,
        Self::Faq,
        Self::Breadcrumb,
        Self::Product,
        Self::Article,
    ];

    pub fn name(&self) -> &str {
        match self {
            Self::Software => "software",
            Self::Organization => "organization",
            Self::Faq => "faq",
            Self::Breadcrumb => "breadcrumb",
            Self::Product => "product",
            Self::Article => "article",
            Self::Unknown(name) => name,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Build the JSON-LD document for this kind.
    pub fn document(&self, payload: Option<&Value>, site: &SiteDefaults) -> Value {
        match self {
            Self::Software => software(site),
            Self::Organization => organization(site),
            Self::Faq => json!({
                "@context": CONTEXT,
                "@type": "FAQPage",
                "mainEntity": payload.cloned().unwrap_or_else(|| sample_faq(site)),
            }),
            Self::Breadcrumb => json!({
                "@context": CONTEXT,
                "@type": "BreadcrumbList",
                "itemListElement": payload.cloned().unwrap_or_else(|| sample_breadcrumb(site)),
            }),
            Self::Product => payload.cloned().unwrap_or_else(|| sample_product(site)),
            Self::Article => payload.cloned().unwrap_or_else(|| sample_article(site)),
            Self::Unknown(_) => payload.cloned().unwrap_or_else(|| json!({})),
        }
    }
}

impl FromStr for SchemaKind {
    type Err = std::convert::Infallible;

    /// Never fails: unrecognized names become [`SchemaKind::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "software" => Self::Software,
            "organization" => Self::Organization,
            "faq" => Self::Faq,
            "breadcrumb" => Self::Breadcrumb,
            "product" => Self::Product,
            "article" => Self::Article,
            _ => Self::Unknown(s.to_string()),
        })
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn software(site: &SiteDefaults) -> Value {
    let schema = &site.schema;
    json!({
        "@context": CONTEXT,
        "@type": "SoftwareApplication",
        "name": site.brand_name,
        "applicationCategory": schema.application_category,
        "operatingSystem": schema.operating_system,
        "description": site.default_description,
        "url": site.base(),
        "author": {
            "@type": "Organization",
            "name": site.default_author,
        },
        "offers": {
            "@type": "Offer",
            "price": schema.price,
            "priceCurrency": schema.price_currency,
            "description": schema.offer_description,
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": schema.rating_value,
            "ratingCount": schema.rating_count,
        },
        "featureList": schema.features,
    })
}

fn organization(site: &SiteDefaults) -> Value {
    let schema = &site.schema;
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": site.brand_name,
        "url": site.base(),
        "logo": site.absolute_url(&schema.logo),
        "description": schema.organization_description,
        "foundingDate": schema.founding_date,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": schema.telephone,
            "contactType": schema.contact_type,
            "availableLanguage": schema.available_language,
        },
        "sameAs": site.social.profiles,
    })
}

fn sample_faq(site: &SiteDefaults) -> Value {
    json!([{
        "@type": "Question",
        "name": format!("What is {}?", site.brand_name),
        "acceptedAnswer": {
            "@type": "Answer",
            "text": format!(
                "{} is an AI-powered productivity platform that helps teams manage tasks, \
                 track project progress, and collaborate effectively.",
                site.brand_name
            ),
        },
    }])
}

fn sample_breadcrumb(site: &SiteDefaults) -> Value {
    json!([{
        "@type": "ListItem",
        "position": 1,
        "name": "Home",
        "item": site.base(),
    }])
}

fn sample_product(site: &SiteDefaults) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Product",
        "name": site.brand_name,
        "description": site.default_description,
        "brand": site.brand_name,
        "offers": {
            "@type": "Offer",
            "price": site.schema.price,
            "priceCurrency": site.schema.price_currency,
            "availability": Availability::InStock.schema_url(),
        },
    })
}

fn sample_article(site: &SiteDefaults) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Article",
        "headline": site.default_title,
        "description": site.default_description,
        "author": {
            "@type": "Organization",
            "name": site.default_author,
        },
        "publisher": publisher(site),
    })
}

fn publisher(site: &SiteDefaults) -> Value {
    json!({
        "@type": "Organization",
        "name": site.brand_name,
        "logo": {
            "@type": "ImageObject",
            "url": site.absolute_url(&site.schema.logo),
        },
    })
}

/// Document describing a composed page: `Article` or `Product`.
///
/// Website pages have no page-level document.
pub fn page_document(meta: &ComposedMetadata, site: &SiteDefaults) -> Option<Value> {
    let image = site.absolute_url(&meta.open_graph.image);

    match &meta.extension {
        KindMeta::Website => None,
        KindMeta::Article(article) => {
            let mut doc = json!({
                "@context": CONTEXT,
                "@type": "Article",
                "headline": meta.headline,
                "description": meta.description,
                "image": image,
                "url": meta.canonical_url,
                "author": {
                    "@type": "Person",
                    "name": article.author,
                },
                "publisher": publisher(site),
            });
            let fields = [
                ("datePublished", article.published_time.as_ref()),
                ("dateModified", article.modified_time.as_ref()),
                ("articleSection", article.section.as_ref()),
            ];
            for (key, value) in fields {
                if let Some(value) = value {
                    doc[key] = json!(value);
                }
            }
            if !article.tags.is_empty() {
                doc["keywords"] = json!(article.tags.join(", "));
            }
            Some(doc)
        }
        KindMeta::Product(product) => {
            let mut offer = json!({
                "@type": "Offer",
                "priceCurrency": product.currency,
                "availability": product.availability.schema_url(),
                "url": meta.canonical_url,
            });
            if let Some(price) = &product.price {
                offer["price"] = json!(price);
            }
            Some(json!({
                "@context": CONTEXT,
                "@type": "Product",
                "name": meta.headline,
                "description": meta.description,
                "image": image,
                "brand": {
                    "@type": "Brand",
                    "name": product.brand,
                },
                "category": product.category,
                "offers": offer,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{EntityData, resolve};
    use crate::seo::compose;

    fn site() -> SiteDefaults {
        SiteDefaults::default()
    }

    #[test]
    fn test_parse_kinds() {
        for kind in SchemaKind::KNOWN {
            assert_eq!(kind.name().parse::<SchemaKind>(), Ok(kind.clone()));
        }
        assert_eq!("FAQ".parse::<SchemaKind>(), Ok(SchemaKind::Faq));
        assert_eq!(
            "recipe".parse::<SchemaKind>(),
            Ok(SchemaKind::Unknown("recipe".into()))
        );
    }

    #[test]
    fn test_software_document() {
        let doc = SchemaKind::Software.document(None, &site());
        assert_eq!(doc["@type"], "SoftwareApplication");
        assert_eq!(doc["name"], "Light SaaS");
        assert_eq!(doc["url"], "https://light-saas.com");
        assert_eq!(doc["offers"]["price"], "0");
        assert_eq!(doc["aggregateRating"]["ratingCount"], "1250");
        assert_eq!(doc["featureList"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_organization_document() {
        let doc = SchemaKind::Organization.document(None, &site());
        assert_eq!(doc["logo"], "https://light-saas.com/logo.png");
        assert_eq!(doc["contactPoint"]["telephone"], "+1-555-0123");
        assert_eq!(doc["sameAs"][0], "https://twitter.com/lightsaas");
    }

    #[test]
    fn test_faq_and_breadcrumb_defaults() {
        let faq = SchemaKind::Faq.document(None, &site());
        assert_eq!(faq["@type"], "FAQPage");
        assert_eq!(faq["mainEntity"][0]["name"], "What is Light SaaS?");

        let crumbs = SchemaKind::Breadcrumb.document(None, &site());
        assert_eq!(crumbs["itemListElement"][0]["position"], 1);
        assert_eq!(crumbs["itemListElement"][0]["item"], "https://light-saas.com");
    }

    #[test]
    fn test_payload_replaces_sample_content() {
        let items = json!([{"@type": "ListItem", "position": 1, "name": "Docs"}]);
        let doc = SchemaKind::Breadcrumb.document(Some(&items), &site());
        assert_eq!(doc["itemListElement"], items);
        assert_eq!(doc["@context"], CONTEXT);

        let product = json!({"@type": "Product", "name": "Light SaaS Pro"});
        assert_eq!(SchemaKind::Product.document(Some(&product), &site()), product);
        assert_eq!(SchemaKind::Article.document(Some(&product), &site()), product);
    }

    #[test]
    fn test_payload_ignored_for_fixed_kinds() {
        let payload = json!({"name": "Other"});
        assert_eq!(
            SchemaKind::Software.document(Some(&payload), &site()),
            SchemaKind::Software.document(None, &site())
        );
    }

    #[test]
    fn test_unknown_kind() {
        let kind = SchemaKind::Unknown("recipe".into());
        assert_eq!(kind.document(None, &site()), json!({}));
        let payload = json!({"@type": "Recipe"});
        assert_eq!(kind.document(Some(&payload), &site()), payload);
    }

    #[test]
    fn test_page_document_for_product() {
        let data = EntityData::from_value(json!({"name": "Pro Plan", "price": 19})).unwrap();
        let meta = compose(&resolve("/products/pro-plan", Some(&data), &site()), &site());
        let doc = page_document(&meta, &site()).unwrap();

        assert_eq!(doc["@type"], "Product");
        assert_eq!(doc["name"], "Pro Plan");
        assert_eq!(doc["offers"]["price"], "19");
        assert_eq!(doc["offers"]["availability"], "https://schema.org/InStock");
        assert_eq!(doc["image"], "https://light-saas.com/products/pro-plan-og.jpg");
    }

    #[test]
    fn test_page_document_for_article_and_website() {
        let data = EntityData::from_value(json!({"publishedAt": "2024-01-15"})).unwrap();
        let meta = compose(&resolve("/blog/focus", Some(&data), &site()), &site());
        let doc = page_document(&meta, &site()).unwrap();
        assert_eq!(doc["@type"], "Article");
        assert_eq!(doc["headline"], "Focus");
        assert_eq!(doc["datePublished"], "2024-01-15");
        assert!(doc.get("dateModified").is_none());

        let meta = compose(&resolve("/", None, &site()), &site());
        assert!(page_document(&meta, &site()).is_none());
    }
}
