//! Page types: intent, entity data, and path resolution.

mod entity;
mod intent;
mod kind;
mod route;

pub use entity::{EntityData, EntityError};
pub use intent::PageIntent;
pub use kind::{ArticleIntent, Availability, DEFAULT_CURRENCY, PageKind, ProductIntent};
pub use route::{FALLBACK_ROUTE, PathResolver, STATIC_ROUTES, StaticRoute, resolve};

/// A JSON object map for loosely-typed entity fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
