//! In-memory HTML document implementing [`HeadDom`].
//!
//! Parsed with `tl`, serialized back by hand. Text is kept exactly as
//! written; attribute values are decoded on parse and escaped on output.

use super::dom::HeadDom;
use super::head::TagKey;
use crate::utils::html::{escape, escape_attr, is_void_element, unescape};
use thiserror::Error;

/// HTML could not be parsed at all.
#[derive(Debug, Error)]
#[error("failed to parse HTML: {0}")]
pub struct ParseError(String);

/// A parsed document node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text, emitted verbatim.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Decoded attribute values, in document order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.into(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, key: TagKey<'_>) -> bool {
        self.tag == key.tag && self.attr(key.attr) == Some(key.value)
    }

    fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(elem) if elem.tag == tag => Some(elem),
            Node::Element(elem) => elem.find(tag),
            Node::Text(_) => None,
        })
    }

    fn find_mut(&mut self, tag: &str) -> Option<&mut Element> {
        for node in &mut self.children {
            if let Node::Element(elem) = node {
                if elem.tag == tag {
                    return Some(elem);
                }
                if let Some(found) = elem.find_mut(tag) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            Node::Text(_) => None,
        })
    }

    fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(elem) => Some(elem),
            Node::Text(_) => None,
        })
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');

        if is_void_element(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(elem) => elem.write_html(out),
            Self::Text(text) => out.push_str(text),
        }
    }
}

/// A whole HTML document held in memory.
///
/// `MemoryDocument::default()` is an empty document without a head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    doctype: Option<String>,
    /// Top-level nodes; a synthetic root element holds them.
    root: Element,
}

impl MemoryDocument {
    /// Minimal `<html><head></head><body></body></html>` skeleton.
    pub fn skeleton() -> Self {
        let mut html = Element::new("html", &[]);
        html.children.push(Node::Element(Element::new("head", &[])));
        html.children.push(Node::Element(Element::new("body", &[])));

        let mut root = Element::default();
        root.children.push(Node::Element(html));
        Self {
            doctype: Some("<!DOCTYPE html>".into()),
            root,
        }
    }

    /// Parse an HTML document or fragment.
    pub fn from_html(html: &str) -> Result<Self, ParseError> {
        let (doctype, body) = split_doctype(html);
        let (body, stashed) = stash_raw(body);

        let dom = tl::parse(&body, tl::ParserOptions::default())
            .map_err(|e| ParseError(format!("{e:?}")))?;
        let parser = dom.parser();

        let mut root = Element::default();
        for handle in dom.children() {
            convert(*handle, parser, &stashed, &mut root.children);
        }

        Ok(Self {
            doctype: doctype.map(str::to_string),
            root,
        })
    }

    /// Serialize back to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        if let Some(doctype) = &self.doctype {
            out.push_str(doctype);
        }
        for node in &self.root.children {
            node.write_html(&mut out);
        }
        out
    }

    pub fn head(&self) -> Option<&Element> {
        self.root.find("head")
    }

    fn head_mut(&mut self) -> Option<&mut Element> {
        self.root.find_mut("head")
    }

    /// Text of the head `<title>`, decoded.
    pub fn title(&self) -> Option<String> {
        let title = self.head()?.find("title")?;
        let text: String = title
            .children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect();
        Some(unescape(&text).into_owned())
    }

    /// Attribute `name` of the first head element matching `key`.
    pub fn attr_of(&self, key: TagKey<'_>, name: &str) -> Option<String> {
        self.head()?
            .elements()
            .find(|elem| elem.matches(key))
            .and_then(|elem| elem.attr(name))
            .map(str::to_string)
    }

    /// Every head element as `(tag, attrs)`, sorted.
    pub fn head_tags(&self) -> Vec<(String, Vec<(String, String)>)> {
        let mut tags: Vec<_> = self
            .head()
            .into_iter()
            .flat_map(Element::elements)
            .map(|elem| (elem.tag.clone(), elem.attrs.clone()))
            .collect();
        tags.sort();
        tags
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new("", &[])
    }
}

impl HeadDom for MemoryDocument {
    fn has_head(&self) -> bool {
        self.head().is_some()
    }

    fn set_title(&mut self, title: &str) {
        let Some(head) = self.head_mut() else {
            return;
        };
        let text = Node::Text(escape(title).into_owned());

        let index = head
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(elem) if elem.tag == "title"));
        match index {
            Some(i) => {
                if let Node::Element(elem) = &mut head.children[i] {
                    elem.children = vec![text];
                }
            }
            None => {
                let mut elem = Element::new("title", &[]);
                elem.children.push(text);
                head.children.insert(0, Node::Element(elem));
            }
        }
    }

    fn count(&self, key: TagKey<'_>) -> usize {
        self.head()
            .map(|head| head.elements().filter(|elem| elem.matches(key)).count())
            .unwrap_or(0)
    }

    fn set_attrs(&mut self, key: TagKey<'_>, nth: usize, attrs: &[(&str, &str)]) {
        let target = self
            .head_mut()
            .and_then(|head| head.elements_mut().filter(|elem| elem.matches(key)).nth(nth));
        if let Some(elem) = target {
            elem.attrs = Element::new("", attrs).attrs;
        }
    }

    fn append(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        if let Some(head) = self.head_mut() {
            head.children.push(Node::Element(Element::new(tag, attrs)));
        }
    }

    fn remove_from(&mut self, key: TagKey<'_>, from: usize) {
        let Some(head) = self.head_mut() else {
            return;
        };
        let mut seen = 0;
        head.children.retain(|node| match node {
            Node::Element(elem) if elem.matches(key) => {
                seen += 1;
                seen <= from
            }
            _ => true,
        });
    }
}

/// Split a leading `<!DOCTYPE ...>` off the input.
fn split_doctype(html: &str) -> (Option<&str>, &str) {
    let trimmed = html.trim_start();
    let is_doctype = trimmed
        .get(..9)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("<!doctype"));

    match trimmed.find('>') {
        Some(end) if is_doctype => (Some(&trimmed[..=end]), &trimmed[end + 1..]),
        _ => (None, html),
    }
}

// ============================================================================
// raw text stash
// ============================================================================

/// Elements whose content is text, never markup.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

const MARK_OPEN: char = '\u{E000}';
const MARK_CLOSE: char = '\u{E001}';

/// Cut comments and raw-text element bodies out of `html`.
///
/// Each piece is replaced by a private-use marker holding its index into the
/// returned list, so `tl` never sees their content. [`restore`] puts them back.
fn stash_raw(html: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(html.len());
    let mut stashed = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        if rest.starts_with("<!--") {
            let end = rest.find("-->").map_or(rest.len(), |i| i + 3);
            push_marker(&mut out, &mut stashed, &rest[..end]);
            rest = &rest[end..];
            continue;
        }

        if let Some(name) = raw_text_open(rest)
            && let Some(open_end) = open_tag_end(rest)
        {
            out.push_str(&rest[..open_end]);
            rest = &rest[open_end..];
            let close = rest
                .to_ascii_lowercase()
                .find(&format!("</{name}"))
                .unwrap_or(rest.len());
            if close > 0 {
                push_marker(&mut out, &mut stashed, &rest[..close]);
            }
            rest = &rest[close..];
            continue;
        }

        out.push('<');
        rest = &rest[1..];
    }

    out.push_str(rest);
    (out, stashed)
}

fn push_marker(out: &mut String, stashed: &mut Vec<String>, raw: &str) {
    out.push(MARK_OPEN);
    out.push_str(&stashed.len().to_string());
    out.push(MARK_CLOSE);
    stashed.push(raw.to_string());
}

/// Name of the raw-text element opened at the start of `s`, if any.
fn raw_text_open(s: &str) -> Option<&'static str> {
    RAW_TEXT_ELEMENTS.into_iter().find(|name| {
        let end = name.len() + 1;
        s.get(1..end)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
            && s.as_bytes()
                .get(end)
                .is_some_and(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace())
    })
}

/// Byte offset just past the `>` closing the tag at the start of `s`.
fn open_tag_end(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, b) in s.bytes().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Replace stash markers in `text` with the stashed source.
fn restore(text: &str, stashed: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(MARK_OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + MARK_OPEN.len_utf8()..];
        let entry = after.find(MARK_CLOSE).and_then(|end| {
            let piece = after[..end].parse::<usize>().ok().and_then(|i| stashed.get(i))?;
            Some((piece, end))
        });
        match entry {
            Some((piece, end)) => {
                out.push_str(piece);
                rest = &after[end + MARK_CLOSE.len_utf8()..];
            }
            None => {
                out.push(MARK_OPEN);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Convert a `tl` node, pushing the result into `out`.
///
/// Children wrongly nested under a void element are lifted to siblings.
fn convert(
    handle: tl::NodeHandle,
    parser: &tl::Parser,
    stashed: &[String],
    out: &mut Vec<Node>,
) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();
            let attrs = tag
                .attributes()
                .iter()
                .map(|(key, value)| {
                    let key: &str = key.as_ref();
                    let value = value
                        .map(|v| unescape(&restore(&v, stashed)).into_owned())
                        .unwrap_or_default();
                    (key.to_lowercase(), value)
                })
                .collect();

            let mut children = Vec::new();
            for child in tag.children().top().iter() {
                convert(*child, parser, stashed, &mut children);
            }

            if is_void_element(&name) {
                out.push(Node::Element(Element {
                    tag: name,
                    attrs,
                    children: Vec::new(),
                }));
                out.extend(children);
            } else {
                out.push(Node::Element(Element {
                    tag: name,
                    attrs,
                    children,
                }));
            }
        }
        tl::Node::Raw(bytes) => out.push(Node::Text(restore(&bytes.as_utf8_str(), stashed))),
        tl::Node::Comment(bytes) => out.push(Node::Text(bytes.as_utf8_str().into_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_simple_document() {
        let html = "<!DOCTYPE html><html lang=\"en\"><head><title>Hi &amp; bye</title>\
            <meta name=\"description\" content=\"a &quot;b&quot;\"></head>\
            <body><p>text</p></body></html>";
        let doc = MemoryDocument::from_html(html).unwrap();
        assert_eq!(doc.to_html(), html);
        assert_eq!(doc.title().as_deref(), Some("Hi & bye"));
    }

    #[test]
    fn test_split_doctype() {
        assert_eq!(
            split_doctype("<!doctype html><html></html>"),
            (Some("<!doctype html>"), "<html></html>")
        );
        assert_eq!(split_doctype("<html></html>"), (None, "<html></html>"));
    }

    #[test]
    fn test_skeleton_has_head() {
        let doc = MemoryDocument::skeleton();
        assert!(doc.has_head());
        assert_eq!(
            doc.to_html(),
            "<!DOCTYPE html><html><head></head><body></body></html>"
        );
        assert!(!MemoryDocument::default().has_head());
    }

    #[test]
    fn test_head_dom_operations() {
        let mut doc = MemoryDocument::skeleton();
        let key = TagKey {
            tag: "meta",
            attr: "name",
            value: "format-detection",
        };

        doc.append("meta", &[("name", "format-detection"), ("content", "a")]);
        doc.append("meta", &[("name", "format-detection"), ("content", "b")]);
        assert_eq!(doc.count(key), 2);

        doc.set_attrs(key, 1, &[("name", "format-detection"), ("content", "c")]);
        doc.remove_from(key, 1);
        assert_eq!(doc.count(key), 1);
        assert_eq!(doc.attr_of(key, "content").as_deref(), Some("a"));

        doc.set_title("A <b>");
        assert_eq!(doc.title().as_deref(), Some("A <b>"));
        assert!(doc.to_html().contains("<title>A &lt;b&gt;</title>"));
    }

    #[test]
    fn test_script_content_kept_verbatim() {
        let html = "<head><script>if (a<b && c>d) { x = \"<div>\"; }</script>\
            <style>p > a { color: red }</style></head><body><p>after</p></body>";
        let doc = MemoryDocument::from_html(html).unwrap();
        assert_eq!(doc.to_html(), html);
        assert!(doc.head().unwrap().find("body").is_none());
    }

    #[test]
    fn test_comments_kept_verbatim() {
        let html = "<html><head><!-- keep me --><title>x</title>\
            <!--[if IE]><link rel=\"stylesheet\" href=\"/ie.css\"><![endif]--></head>\
            <body></body></html>";
        let doc = MemoryDocument::from_html(html).unwrap();
        assert_eq!(doc.to_html(), html);
        assert_eq!(doc.title().as_deref(), Some("x"));
        // the commented-out link is not a head element
        assert_eq!(doc.head_tags().len(), 1);
    }

    #[test]
    fn test_title_text_is_raw() {
        let doc = MemoryDocument::from_html("<head><title>a <b> c</title></head>").unwrap();
        assert_eq!(doc.title().as_deref(), Some("a <b> c"));
        assert_eq!(doc.to_html(), "<head><title>a <b> c</title></head>");
    }

    #[test]
    fn test_set_title_replaces_existing() {
        let mut doc = MemoryDocument::from_html("<head><meta charset=\"utf-8\"><title>old</title></head>").unwrap();
        doc.set_title("new");
        assert_eq!(
            doc.to_html(),
            "<head><meta charset=\"utf-8\"><title>new</title></head>"
        );
    }

    #[test]
    fn test_stash_and_restore() {
        let (body, stashed) = stash_raw("<p>a<!-- c --></p><SCRIPT type=\"x>y\">1<2</SCRIPT>");
        assert_eq!(stashed, ["<!-- c -->", "1<2"]);
        assert!(!body.contains("1<2"));
        assert_eq!(restore("\u{E000}1\u{E001}!", &stashed), "1<2!");
        assert_eq!(restore("\u{E000}9\u{E001}", &stashed), "\u{E000}9\u{E001}");
    }

    #[test]
    fn test_boolean_attribute_round_trip() {
        let html = "<html><head><script src=\"/a.js\" defer></script></head></html>";
        let doc = MemoryDocument::from_html(html).unwrap();
        assert_eq!(doc.to_html(), html);
    }
}
