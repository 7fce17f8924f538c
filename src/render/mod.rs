//! Render adapters: one composed record, three output channels.
//!
//! | Adapter                  | Output                                   |
//! |--------------------------|------------------------------------------|
//! | [`StaticHeadAdapter`]    | ordered `<head>` tags, static HTML       |
//! | [`ImperativeDomAdapter`] | in-place updates of a [`HeadDom`]        |
//! | [`StructuredDataAdapter`]| `application/ld+json` payloads           |
//!
//! The adapters are independent: a missing head only fails the DOM adapter.

mod document;
mod dom;
mod head;
mod jsonld;

pub use document::{Element, MemoryDocument, Node, ParseError};
pub use dom::{ApplyStats, DomError, HeadDom, ImperativeDomAdapter};
pub use head::{
    HeadDescriptor, HeadTag, KIND_KEYS, LinkTag, MetaAttr, MetaTag, SITE_KEYS, StaticHeadAdapter,
    TagKey,
};
pub use jsonld::{StructuredDataAdapter, script_tag};
