//! Per-request page intent.

use super::kind::PageKind;
use serde::Serialize;

/// What a single page wants from the metadata layer, before site defaults
/// are merged in.
///
/// Built fresh for every request by the path resolver and consumed by the
/// composer. `None` means "use the site default".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageIntent {
    pub kind: PageKind,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Page keywords, placed before the site keywords.
    pub keywords: Vec<String>,
    /// Site-relative path, always starting with `/`.
    pub canonical_path: String,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub no_index: bool,
}

impl PageIntent {
    /// Website page at `canonical_path` with nothing overridden.
    pub fn website(canonical_path: impl Into<String>) -> Self {
        Self {
            canonical_path: canonical_path.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: PageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_og_image(mut self, image: impl Into<String>) -> Self {
        self.og_image = Some(image.into());
        self
    }

    pub fn with_twitter_image(mut self, image: impl Into<String>) -> Self {
        self.twitter_image = Some(image.into());
        self
    }

    pub fn with_no_index(mut self, no_index: bool) -> Self {
        self.no_index = no_index;
        self
    }
}
