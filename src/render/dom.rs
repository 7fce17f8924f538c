//! Imperative head updates.
//!
//! Applies composed metadata to a live document head: every tag is located
//! by its key (`meta[name=..]`, `meta[property=..]`, `link[rel=..]`), then
//! updated in place or created. Applying the same metadata twice leaves the
//! head unchanged, and applying B after A leaves exactly B's tag set.
//!
//! Tags sharing a key (`article:tag`, `format-detection`, `rel="icon"`) are
//! reconciled as a group:
//!
//! ```text
//! existing: [a, b, c]    wanted: [x, y]
//!            |  |  └── removed
//!            |  └───── overwritten with y
//!            └──────── overwritten with x
//! ```

use super::head::{HeadDescriptor, HeadTag, KIND_KEYS, SITE_KEYS, TagKey};
use crate::config::SiteDefaults;
use crate::debug;
use crate::seo::ComposedMetadata;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors from [`ImperativeDomAdapter::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The document has no `<head>` to write into.
    #[error("document has no <head> element")]
    Unavailable,
}

/// A mutable document head, addressed by tag keys.
///
/// Indices passed to `set_attrs` count only the elements matching `key`,
/// in document order.
pub trait HeadDom {
    /// Whether a `<head>` element exists.
    fn has_head(&self) -> bool;

    /// Set the document title, creating `<title>` if missing.
    fn set_title(&mut self, title: &str);

    /// Number of head elements matching `key`.
    fn count(&self, key: TagKey<'_>) -> usize;

    /// Replace all attributes of the `nth` element matching `key`.
    fn set_attrs(&mut self, key: TagKey<'_>, nth: usize, attrs: &[(&str, &str)]);

    /// Append a new element to the head.
    fn append(&mut self, tag: &str, attrs: &[(&str, &str)]);

    /// Remove every element matching `key` from the `from`-th one on.
    fn remove_from(&mut self, key: TagKey<'_>, from: usize);
}

/// What one application changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    pub updated: usize,
    pub created: usize,
    pub removed: usize,
}

/// Writes composed metadata into a [`HeadDom`].
#[derive(Debug, Clone, Copy)]
pub struct ImperativeDomAdapter<'a> {
    site: &'a SiteDefaults,
}

impl<'a> ImperativeDomAdapter<'a> {
    pub fn new(site: &'a SiteDefaults) -> Self {
        Self { site }
    }

    /// Apply `meta` to `dom`.
    ///
    /// Fails only with [`DomError::Unavailable`], before touching the DOM.
    pub fn apply<D>(&self, meta: &ComposedMetadata, dom: &mut D) -> Result<ApplyStats, DomError>
    where
        D: HeadDom + ?Sized,
    {
        if !dom.has_head() {
            debug!("dom"; "no <head>, skipping {}", meta.canonical_url);
            return Err(DomError::Unavailable);
        }

        let head = HeadDescriptor::build(meta, self.site);
        let mut stats = ApplyStats::default();

        dom.set_title(&head.title);

        let groups = group_by_key(&head.tags);
        for (key, tags) in &groups {
            reconcile(dom, *key, tags, &mut stats);
        }

        // managed tags the new page does not carry
        let stale = KIND_KEYS
            .into_iter()
            .map(|value| TagKey {
                tag: "meta",
                attr: "property",
                value,
            })
            .chain(SITE_KEYS);
        for key in stale {
            if !groups.iter().any(|(k, _)| *k == key) {
                reconcile(dom, key, &[], &mut stats);
            }
        }

        debug!("dom"; "{}: {} updated, {} created, {} removed",
            meta.canonical_url, stats.updated, stats.created, stats.removed);
        Ok(stats)
    }
}

/// Group tags by key, keeping the order of first appearance.
fn group_by_key(tags: &[HeadTag]) -> Vec<(TagKey<'_>, Vec<&HeadTag>)> {
    let mut index: FxHashMap<TagKey<'_>, usize> = FxHashMap::default();
    let mut groups: Vec<(TagKey<'_>, Vec<&HeadTag>)> = Vec::new();

    for tag in tags {
        let key = tag.key();
        match index.get(&key) {
            Some(&i) => groups[i].1.push(tag),
            None => {
                index.insert(key, groups.len());
                groups.push((key, vec![tag]));
            }
        }
    }
    groups
}

fn reconcile<D>(dom: &mut D, key: TagKey<'_>, wanted: &[&HeadTag], stats: &mut ApplyStats)
where
    D: HeadDom + ?Sized,
{
    let existing = dom.count(key);

    for (i, tag) in wanted.iter().enumerate() {
        let attrs = tag.attrs();
        if i < existing {
            dom.set_attrs(key, i, &attrs);
            stats.updated += 1;
        } else {
            dom.append(tag.tag_name(), &attrs);
            stats.created += 1;
        }
    }

    if existing > wanted.len() {
        dom.remove_from(key, wanted.len());
        stats.removed += existing - wanted.len();
    }
}
