//! SEO metadata: composition and structured data.
//!
//! - [`compose`]: merge a page intent with site defaults
//! - [`ComposedMetadata`]: the merged record every adapter renders
//! - [`SchemaKind`]: JSON-LD document kinds

mod compose;
mod meta;
pub mod og;
pub mod schema;

pub use compose::compose;
pub use meta::{
    ArticleMeta, ComposedMetadata, KindMeta, OpenGraph, ProductMeta, Robots, TwitterCard,
};
pub use schema::{SchemaKind, page_document};
