//! `schema`: structured data documents.

use super::common::{emit, read_json_arg};
use crate::config::SiteDefaults;
use crate::render::StructuredDataAdapter;
use crate::seo::SchemaKind;
use crate::{debug, log};
use anyhow::{Context, Result};

/// `lumen schema <kind>`.
pub fn run_schema(kind: &str, payload: Option<&str>, raw: bool, site: &SiteDefaults) -> Result<()> {
    let kind: SchemaKind = kind.parse()?;
    if !kind.is_known() {
        log!("warning"; "unknown schema kind `{}`, rendering payload or {{}}", kind);
    }

    let payload = payload
        .map(read_json_arg)
        .transpose()
        .context("Failed to load payload")?;
    debug!("schema"; "{} (payload: {})", kind, payload.is_some());

    let adapter = StructuredDataAdapter::new(site);
    let out = if raw {
        adapter.render(&kind, payload.as_ref())
    } else {
        adapter.script_tag(&kind, payload.as_ref())
    };
    emit(&out, None)
}
