//! Page kind and its kind-specific fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which SEO template a page uses.
///
/// Kind-specific fields live inside the variant, so an article can never
/// carry a price and a website page carries neither block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageKind {
    #[default]
    Website,
    Article(ArticleIntent),
    Product(ProductIntent),
}

impl PageKind {
    /// Name used in `og:type`-like contexts and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article(_) => "article",
            Self::Product(_) => "product",
        }
    }

    #[inline]
    pub fn is_article(&self) -> bool {
        matches!(self, Self::Article(_))
    }

    #[inline]
    pub fn is_product(&self) -> bool {
        matches!(self, Self::Product(_))
    }
}

/// Article fields. Unset values fall back to site defaults when composed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArticleIntent {
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Product fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductIntent {
    pub price: Option<String>,
    pub currency: String,
    pub availability: Availability,
    pub brand: Option<String>,
    pub category: Option<String>,
}

impl Default for ProductIntent {
    fn default() -> Self {
        Self {
            price: None,
            currency: DEFAULT_CURRENCY.into(),
            availability: Availability::InStock,
            brand: None,
            category: None,
        }
    }
}

/// Currency used when a product names none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Product stock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    Preorder,
}

impl Availability {
    /// Identifier form, e.g. `in_stock`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
            Self::Preorder => "preorder",
        }
    }

    /// Value for the `product:availability` meta tag.
    pub const fn og_value(&self) -> &'static str {
        match self {
            Self::InStock => "in stock",
            Self::OutOfStock => "out of stock",
            Self::Preorder => "preorder",
        }
    }

    /// schema.org `ItemAvailability` URL.
    pub const fn schema_url(&self) -> &'static str {
        match self {
            Self::InStock => "https://schema.org/InStock",
            Self::OutOfStock => "https://schema.org/OutOfStock",
            Self::Preorder => "https://schema.org/PreOrder",
        }
    }

    /// Map an `inStock` flag.
    #[inline]
    pub const fn from_flag(in_stock: bool) -> Self {
        if in_stock {
            Self::InStock
        } else {
            Self::OutOfStock
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized availability string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown availability `{0}`")]
pub struct UnknownAvailability(pub String);

impl FromStr for Availability {
    type Err = UnknownAvailability;

    /// Accepts the identifier, Open Graph and schema.org spellings,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .trim_start_matches("https://schema.org/")
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "instock" => Ok(Self::InStock),
            "outofstock" => Ok(Self::OutOfStock),
            "preorder" => Ok(Self::Preorder),
            _ => Err(UnknownAvailability(s.to_string())),
        }
    }
}
