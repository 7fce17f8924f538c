//! Configuration section definitions.
//!
//! | Module    | TOML Section     | Purpose                              |
//! |-----------|------------------|--------------------------------------|
//! | `site`    | `[site]`         | Brand, titles, urls, social, tokens  |
//! | `head`    | `[site.head]`    | Static head tags and icons           |
//! | `schema`  | `[site.schema]`  | Structured data facts                |
//! | `sitemap` | `[sitemap]`      | Sitemap output                       |

mod head;
mod schema;
mod site;
mod sitemap;

pub use head::{HeadDefaults, IconLink};
pub use schema::SchemaDefaults;
pub use site::{SiteDefaults, SocialConfig, TITLE_PLACEHOLDER};
pub use sitemap::SitemapConfig;
