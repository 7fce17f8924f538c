//! JSON-LD output.

use crate::config::SiteDefaults;
use crate::seo::SchemaKind;
use crate::utils::html::escape_script;
use serde_json::Value;

/// Serializes structured data documents.
#[derive(Debug, Clone, Copy)]
pub struct StructuredDataAdapter<'a> {
    site: &'a SiteDefaults,
}

impl<'a> StructuredDataAdapter<'a> {
    pub fn new(site: &'a SiteDefaults) -> Self {
        Self { site }
    }

    /// Compact JSON for `kind`. Never fails: unknown kinds render `{}`.
    pub fn render(&self, kind: &SchemaKind, payload: Option<&Value>) -> String {
        kind.document(payload, self.site).to_string()
    }

    /// `render` wrapped in an embeddable `<script>` element.
    pub fn script_tag(&self, kind: &SchemaKind, payload: Option<&Value>) -> String {
        script_tag(&self.render(kind, payload))
    }
}

/// Wrap serialized JSON in `<script type="application/ld+json">`.
pub fn script_tag(json: &str) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        escape_script(json)
    )
}
