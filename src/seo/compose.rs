//! Merge a [`PageIntent`] with [`SiteDefaults`] into [`ComposedMetadata`].
//!
//! Pure: the same intent and defaults always compose to the same record.
//!
//! | field          | source                                                    |
//! |----------------|-----------------------------------------------------------|
//! | title          | `"<intent.title> \| <brand>"`, else `default_title`      |
//! | description    | intent, else `default_description`                        |
//! | keywords       | intent then `default_keywords`, first occurrence wins     |
//! | canonical_url  | `base_url` + `canonical_path`                             |
//! | og image       | intent og_image, else `default_og_image`                  |
//! | twitter image  | intent twitter_image, else og_image, else default         |
//! | robots         | `!no_index` for both directives                           |

use super::meta::{
    ArticleMeta, ComposedMetadata, KindMeta, OpenGraph, ProductMeta, Robots, TwitterCard,
};
use super::og;
use crate::config::SiteDefaults;
use crate::core::url;
use crate::debug;
use crate::page::{PageIntent, PageKind};
use crate::utils::text::merge_unique;

/// Compose final metadata for one page.
pub fn compose(intent: &PageIntent, site: &SiteDefaults) -> ComposedMetadata {
    let (headline, title) = match intent.title.as_deref() {
        Some(title) => (title.to_string(), site.page_title(title)),
        None => (site.default_title.clone(), site.default_title.clone()),
    };
    let description = intent
        .description
        .clone()
        .unwrap_or_else(|| site.default_description.clone());
    let keywords = merge_unique([intent.keywords.as_slice(), site.default_keywords.as_slice()]);
    let canonical_url = url::join(&site.base_url, &intent.canonical_path);

    let og_image = intent
        .og_image
        .clone()
        .unwrap_or_else(|| site.default_og_image.clone());
    let twitter_image = intent
        .twitter_image
        .as_ref()
        .or(intent.og_image.as_ref())
        .cloned()
        .unwrap_or_else(|| site.default_twitter_image.clone());

    let extension = extension(&intent.kind, site);
    let author = match &extension {
        KindMeta::Article(article) => article.author.clone(),
        _ => site.default_author.clone(),
    };
    let og_type = match &extension {
        KindMeta::Article(_) => og::TYPE_ARTICLE,
        KindMeta::Website | KindMeta::Product(_) => og::TYPE_WEBSITE,
    };

    debug!("compose"; "{} {} ({})", extension.name(), canonical_url, title);

    ComposedMetadata {
        open_graph: OpenGraph {
            og_type,
            title: title.clone(),
            description: description.clone(),
            url: canonical_url.clone(),
            site_name: site.brand_name.clone(),
            image: og_image,
            image_width: og::IMAGE_WIDTH,
            image_height: og::IMAGE_HEIGHT,
            image_alt: og::image_alt(&title, &site.brand_name),
            locale: og::LOCALE,
        },
        twitter: TwitterCard {
            card: og::TWITTER_CARD,
            title: title.clone(),
            description: description.clone(),
            image: twitter_image,
            creator: site.social.twitter_creator.clone(),
            site: site.social.twitter_site.clone(),
        },
        title,
        headline,
        description,
        keywords,
        canonical_url,
        robots: Robots::from_no_index(intent.no_index),
        author,
        extension,
    }
}

fn extension(kind: &PageKind, site: &SiteDefaults) -> KindMeta {
    match kind {
        PageKind::Website => KindMeta::Website,
        PageKind::Article(article) => KindMeta::Article(ArticleMeta {
            author: article
                .author
                .clone()
                .unwrap_or_else(|| site.default_author.clone()),
            published_time: article.published_time.clone(),
            modified_time: article.modified_time.clone(),
            section: article.category.clone(),
            tags: article.tags.clone(),
        }),
        PageKind::Product(product) => KindMeta::Product(ProductMeta {
            price: product.price.clone(),
            currency: product.currency.clone(),
            availability: product.availability,
            brand: product
                .brand
                .clone()
                .unwrap_or_else(|| site.brand_name.clone()),
            category: product
                .category
                .clone()
                .unwrap_or_else(|| og::DEFAULT_PRODUCT_CATEGORY.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ArticleIntent, Availability, EntityData, ProductIntent, resolve};
    use serde_json::json;

    fn site() -> SiteDefaults {
        SiteDefaults::default()
    }

    #[test]
    fn test_title_template_and_default() {
        let site = site();
        let meta = compose(&PageIntent::website("/x").with_title("Docs"), &site);
        assert_eq!(meta.title, "Docs | Light SaaS");

        let meta = compose(&PageIntent::website("/x"), &site);
        assert_eq!(meta.title, site.default_title);
        assert_eq!(meta.description, site.default_description);
    }

    #[test]
    fn test_title_suffix_uses_brand_name() {
        let site = SiteDefaults {
            brand_name: "Acme".into(),
            ..site()
        };
        let meta = compose(&PageIntent::website("/x").with_title("Docs"), &site);
        assert_eq!(meta.title, "Docs | Acme");
        assert_eq!(meta.open_graph.title, "Docs | Acme");
        assert_eq!(meta.headline, "Docs");

        let meta = compose(&resolve("/about", None, &site), &site);
        assert_eq!(meta.title, "About Us - Meet the Acme Team | Acme");
    }

    #[test]
    fn test_keywords_dedup_page_first() {
        let site = SiteDefaults {
            default_keywords: vec!["b".into(), "c".into()],
            ..site()
        };
        let intent = PageIntent::website("/").with_keywords(["a", "b", "a"]);
        assert_eq!(compose(&intent, &site).keywords, ["a", "b", "c"]);
    }

    #[test]
    fn test_canonical_url_no_double_slash() {
        let site = SiteDefaults {
            base_url: "https://light-saas.com/".into(),
            ..site()
        };
        assert_eq!(
            compose(&PageIntent::website("/pricing"), &site).canonical_url,
            "https://light-saas.com/pricing"
        );
        assert_eq!(
            compose(&PageIntent::website("/"), &site).canonical_url,
            "https://light-saas.com/"
        );
    }

    #[test]
    fn test_image_fallback_chain() {
        let site = site();

        let meta = compose(&PageIntent::website("/"), &site);
        assert_eq!(meta.open_graph.image, "/og-image.jpg");
        assert_eq!(meta.twitter.image, "/twitter-image.jpg");

        let meta = compose(&PageIntent::website("/").with_og_image("/a.jpg"), &site);
        assert_eq!(meta.open_graph.image, "/a.jpg");
        assert_eq!(meta.twitter.image, "/a.jpg");

        let intent = PageIntent::website("/")
            .with_og_image("/a.jpg")
            .with_twitter_image("/b.jpg");
        let meta = compose(&intent, &site);
        assert_eq!(meta.open_graph.image, "/a.jpg");
        assert_eq!(meta.twitter.image, "/b.jpg");
    }

    #[test]
    fn test_robots_follow_no_index() {
        let meta = compose(&PageIntent::website("/").with_no_index(true), &site());
        assert_eq!(meta.robots, Robots { index: false, follow: false });
        assert_eq!(meta.robots.content(), "noindex,nofollow");
    }

    #[test]
    fn test_open_graph_and_twitter_fields() {
        let meta = compose(&resolve("/pricing", None, &site()), &site());
        let og = &meta.open_graph;
        assert_eq!(og.og_type, "website");
        assert_eq!(og.title, "Pricing Plans - Choose Your Perfect Plan | Light SaaS");
        assert_eq!(og.url, "https://light-saas.com/pricing");
        assert_eq!(og.site_name, "Light SaaS");
        assert_eq!((og.image_width, og.image_height), (1200, 630));
        assert_eq!(
            og.image_alt,
            "Pricing Plans - Choose Your Perfect Plan | Light SaaS - Light SaaS Dashboard"
        );
        assert_eq!(og.locale, "en_US");

        assert_eq!(meta.twitter.card, "summary_large_image");
        assert_eq!(meta.twitter.creator, "@lightsaas");
        assert_eq!(meta.twitter.site, "@lightsaas");
    }

    #[test]
    fn test_extension_matches_kind() {
        let site = site();

        let website = compose(&PageIntent::website("/"), &site);
        assert_eq!(website.extension, KindMeta::Website);

        let article = compose(
            &PageIntent::website("/blog/x").with_kind(PageKind::Article(ArticleIntent::default())),
            &site,
        );
        assert_eq!(article.open_graph.og_type, "article");
        match article.extension {
            KindMeta::Article(ref a) => assert_eq!(a.author, "Light SaaS Team"),
            ref other => panic!("expected article, got {other:?}"),
        }

        let product = compose(
            &PageIntent::website("/products/x").with_kind(PageKind::Product(ProductIntent::default())),
            &site,
        );
        assert_eq!(product.open_graph.og_type, "website");
        match product.extension {
            KindMeta::Product(ref p) => {
                assert_eq!(p.brand, "Light SaaS");
                assert_eq!(p.category, "Software");
                assert_eq!(p.currency, "USD");
            }
            ref other => panic!("expected product, got {other:?}"),
        }
    }

    #[test]
    fn test_article_author_and_tags() {
        let data = EntityData::from_value(json!({
            "author": "Jane",
            "category": "Guides",
            "tags": ["focus", "tips"]
        }))
        .unwrap();
        let meta = compose(&resolve("/blog/deep-work", Some(&data), &site()), &site());
        assert_eq!(meta.author, "Jane");
        let KindMeta::Article(article) = meta.extension else {
            panic!("expected article");
        };
        assert_eq!(article.section.as_deref(), Some("Guides"));
        assert_eq!(article.tags, ["focus", "tips"]);
    }

    #[test]
    fn test_product_end_to_end() {
        let data = EntityData::from_value(json!({
            "name": "Pro Plan",
            "price": "19",
            "inStock": true
        }))
        .unwrap();
        let meta = compose(&resolve("/products/pro-plan", Some(&data), &site()), &site());

        assert_eq!(meta.title, "Pro Plan | Light SaaS");
        assert_eq!(meta.canonical_url, "https://light-saas.com/products/pro-plan");
        assert_eq!(meta.open_graph.image, "/products/pro-plan-og.jpg");
        assert_eq!(
            meta.extension,
            KindMeta::Product(ProductMeta {
                price: Some("19".into()),
                currency: "USD".into(),
                availability: Availability::InStock,
                brand: "Light SaaS".into(),
                category: "Software".into(),
            })
        );
    }

    #[test]
    fn test_fallback_end_to_end() {
        let meta = compose(&resolve("/unknown/path", None, &site()), &site());
        assert_eq!(meta.title, "Light SaaS - Productivity Platform | Light SaaS");
        assert_eq!(meta.canonical_url, "https://light-saas.com/unknown/path");
        assert_eq!(meta.open_graph.image, "/default-og.jpg");
        assert_eq!(meta.robots.content(), "index,follow");
        assert_eq!(meta.keywords[..3], ["productivity", "task management", "team collaboration"]);
    }

    #[test]
    fn test_resolve_compose_is_idempotent() {
        let site = site();
        for path in ["/", "/blog/a-b", "/products/x", "/pricing/pro", "/nope", ""] {
            let a = compose(&resolve(path, None, &site), &site);
            let b = compose(&resolve(path, None, &site), &site);
            assert_eq!(a, b, "{path:?}");
        }
    }
}
