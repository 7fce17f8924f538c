//! Open Graph and Twitter Card constants.

/// `og:image:width` for every page.
pub const IMAGE_WIDTH: u32 = 1200;

/// `og:image:height` for every page.
pub const IMAGE_HEIGHT: u32 = 630;

/// `og:locale`.
pub const LOCALE: &str = "en_US";

/// `twitter:card`.
pub const TWITTER_CARD: &str = "summary_large_image";

/// `og:type` values.
pub const TYPE_WEBSITE: &str = "website";
pub const TYPE_ARTICLE: &str = "article";

/// Product category when the entity names none.
pub const DEFAULT_PRODUCT_CATEGORY: &str = "Software";

/// `og:image:alt` for a page title.
pub fn image_alt(title: &str, brand: &str) -> String {
    format!("{title} - {brand} Dashboard")
}
