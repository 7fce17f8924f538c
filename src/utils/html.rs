//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script()` - neutralize `</` inside inline `<script>` bodies
//! - `unescape()` - decode the entities `escape()` produces
//! - `is_void_element()` - Self-closing elements (meta, link, etc.)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make text safe to embed verbatim inside `<script>...</script>`.
///
/// Only `</` can terminate a raw text element early, so it is written as
/// `<\/`, which is still the same string to a JSON parser.
#[inline]
pub fn escape_script(s: &str) -> Cow<'_, str> {
    if s.contains("</") {
        Cow::Owned(s.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Decode the basic named entities and numeric character references.
///
/// Unknown or malformed entities are kept as written.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail.find(';').and_then(|end| {
            let c = decode_entity(&tail[1..end])?;
            Some((c, end + 1))
        });
        match decoded {
            Some((c, len)) => {
                result.push(c);
                rest = &tail[len..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("Help Center - Get Support & Learn"), "Help Center - Get Support &amp; Learn");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("team's"), "team&#39;s");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_escape_script() {
        assert_eq!(escape_script(r#"{"a":"b"}"#), r#"{"a":"b"}"#);
        assert_eq!(
            escape_script(r#"{"a":"</script>"}"#),
            r#"{"a":"<\/script>"}"#
        );
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(unescape("&quot;hi&#39; &#x41;"), "\"hi' A");
        assert_eq!(unescape("AT&T &bogus; &"), "AT&T &bogus; &");
        assert_eq!(unescape(&escape("<a href=\"x\">'&'</a>")), "<a href=\"x\">'&'</a>");
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("meta"));
        assert!(is_void_element("link"));
        assert!(!is_void_element("title"));
        assert!(!is_void_element("script"));
    }
}
