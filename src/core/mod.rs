//! Core types - pure abstractions shared across the codebase.

pub mod url;

pub use url::RequestPath;
