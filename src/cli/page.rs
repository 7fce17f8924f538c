//! `resolve`, `head` and `apply`: per-page commands.

use super::EntityArgs;
use super::common::{emit, load_entity};
use crate::config::SiteDefaults;
use crate::log;
use crate::page::PathResolver;
use crate::render::{ImperativeDomAdapter, MemoryDocument, StaticHeadAdapter, script_tag};
use crate::seo::{ComposedMetadata, compose, page_document};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Resolve and compose metadata for `path`.
fn metadata(path: &str, entity: &EntityArgs, site: &SiteDefaults) -> Result<ComposedMetadata> {
    let entity = load_entity(entity)?;
    let intent = PathResolver::new(site).resolve(path, entity.as_ref());
    Ok(compose(&intent, site))
}

/// `lumen resolve`: composed metadata as JSON.
pub fn run_resolve(path: &str, entity: &EntityArgs, pretty: bool, site: &SiteDefaults) -> Result<()> {
    let meta = metadata(path, entity, site)?;
    let json = if pretty {
        serde_json::to_string_pretty(&meta)?
    } else {
        serde_json::to_string(&meta)?
    };
    emit(&json, None)
}

/// `lumen head`: static head markup.
pub fn run_head(path: &str, entity: &EntityArgs, jsonld: bool, site: &SiteDefaults) -> Result<()> {
    let meta = metadata(path, entity, site)?;
    let mut html = StaticHeadAdapter::new(site).render(&meta);

    if jsonld && let Some(doc) = page_document(&meta, site) {
        html.push_str(&script_tag(&doc.to_string()));
        html.push('\n');
    }
    emit(&html, None)
}

/// `lumen apply`: update the head of an HTML file.
pub fn run_apply(
    path: &str,
    html: &Path,
    entity: &EntityArgs,
    output: Option<&Path>,
    site: &SiteDefaults,
) -> Result<()> {
    let meta = metadata(path, entity, site)?;
    let source =
        fs::read_to_string(html).with_context(|| format!("Failed to read {}", html.display()))?;
    let mut doc = MemoryDocument::from_html(&source)
        .with_context(|| format!("Failed to parse {}", html.display()))?;

    let stats = ImperativeDomAdapter::new(site)
        .apply(&meta, &mut doc)
        .with_context(|| format!("Cannot apply metadata to {}", html.display()))?;

    log!("apply"; "{}: {} updated, {} created, {} removed",
        html.display(), stats.updated, stats.created, stats.removed);
    emit(&doc.to_html(), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("index.html");
        let output = dir.path().join("out.html");
        fs::write(&input, "<html><head></head><body></body></html>").unwrap();

        let site = SiteDefaults::default();
        run_apply("/help", &input, &EntityArgs::default(), Some(&output), &site).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("<link rel=\"canonical\" href=\"https://light-saas.com/help\">"));
        assert!(written.contains("<title>Help Center - Get Support &amp; Learn | Light SaaS</title>"));
    }

    #[test]
    fn test_apply_without_head_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("fragment.html");
        fs::write(&input, "<div>fragment</div>").unwrap();

        let site = SiteDefaults::default();
        let err = run_apply("/", &input, &EntityArgs::default(), None, &site).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("no <head>")));
    }

    #[test]
    fn test_metadata_with_entity() {
        let site = SiteDefaults::default();
        let entity = EntityArgs {
            entity: Some(r#"{"name": "Pro Plan", "price": "19", "inStock": true}"#.into()),
        };
        let meta = metadata("/products/pro-plan", &entity, &site).unwrap();
        assert_eq!(meta.title, "Pro Plan | Light SaaS");
    }
}
