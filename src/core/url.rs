//! Request path handling.
//!
//! - Input: whatever the caller hands in (may carry query, fragment,
//!   percent-encoding, a trailing slash, or no leading slash at all)
//! - Output: a decoded path used for route matching and titles, re-encoded
//!   by [`encode_path`] wherever it becomes part of a URL

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;
use std::fmt;

/// Bytes escaped in a URL path. `/` is kept so whole paths can be encoded.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Decoded request path.
///
/// Invariants:
/// - No query string or fragment
/// - No trailing slash, except for the root `/`
/// - Percent-decoded; invalid UTF-8 becomes U+FFFD
///
/// A leading slash is *not* added: a path without one never matches a
/// known route, see [`RequestPath::is_rooted`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestPath(String);

impl RequestPath {
    /// Parse a raw request path.
    pub fn parse(raw: &str) -> Self {
        let path = raw.trim();
        let path = path.split(['?', '#']).next().unwrap_or(path);

        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        // "//" trims down to nothing
        let path = if path.is_empty() && raw.trim().starts_with('/') {
            "/"
        } else {
            path
        };

        Self(percent_decode_str(path).decode_utf8_lossy().into_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path starts with `/`.
    #[inline]
    pub fn is_rooted(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Segment following `prefix`, if this path lives directly under it.
    ///
    /// `/blog/my-post` with prefix `/blog/` -> `Some("my-post")`.
    /// An empty remainder yields `None`.
    pub fn strip_section<'a>(&'a self, prefix: &str) -> Option<&'a str> {
        self.0
            .strip_prefix(prefix)
            .filter(|rest| !rest.is_empty())
    }

    /// Encoded path usable as a canonical path: always starts with `/`.
    pub fn to_canonical(&self) -> String {
        let encoded = encode_path(&self.0);
        if self.is_rooted() {
            encoded.into_owned()
        } else {
            format!("/{encoded}")
        }
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequestPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Percent-encode a decoded path or path segment for use in a URL.
///
/// ```ignore
/// encode_path("/blog/hello world") // "/blog/hello%20world"
/// ```
pub fn encode_path(path: &str) -> Cow<'_, str> {
    utf8_percent_encode(path, PATH).into()
}

/// Join a base URL and a site path without doubling the slash.
///
/// ```ignore
/// join("https://a.com/", "/x") // "https://a.com/x"
/// join("https://a.com", "x")   // "https://a.com/x"
/// ```
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(RequestPath::parse("/pricing").as_str(), "/pricing");
    }

    #[test]
    fn test_parse_strips_query_and_fragment() {
        assert_eq!(RequestPath::parse("/pricing?plan=pro").as_str(), "/pricing");
        assert_eq!(RequestPath::parse("/help#faq").as_str(), "/help");
        assert_eq!(RequestPath::parse("/?ref=x").as_str(), "/");
    }

    #[test]
    fn test_parse_trailing_slash() {
        assert_eq!(RequestPath::parse("/blog/").as_str(), "/blog");
        assert_eq!(RequestPath::parse("/").as_str(), "/");
        assert_eq!(RequestPath::parse("//").as_str(), "/");
    }

    #[test]
    fn test_parse_percent_decoding() {
        assert_eq!(
            RequestPath::parse("/blog/hello%20world").as_str(),
            "/blog/hello world"
        );
        assert_eq!(RequestPath::parse("/blog/%FF").as_str(), "/blog/\u{FFFD}");
    }

    #[test]
    fn test_parse_unrooted_and_empty() {
        let path = RequestPath::parse("blog/post");
        assert!(!path.is_rooted());
        assert_eq!(path.to_canonical(), "/blog/post");

        let empty = RequestPath::parse("");
        assert!(!empty.is_rooted());
        assert_eq!(empty.to_canonical(), "/");
    }

    #[test]
    fn test_canonical_is_encoded() {
        assert_eq!(
            RequestPath::parse("/blog/hello%20world").to_canonical(),
            "/blog/hello%20world"
        );
        assert_eq!(
            RequestPath::parse("/a b/100%25").to_canonical(),
            "/a%20b/100%25"
        );
        assert_eq!(RequestPath::parse("/café").to_canonical(), "/caf%C3%A9");
        assert_eq!(RequestPath::parse("/blog/%FF").to_canonical(), "/blog/%EF%BF%BD");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/pricing"), "/pricing");
        assert_eq!(encode_path("a\"b<c>"), "a%22b%3Cc%3E");
    }

    #[test]
    fn test_strip_section() {
        let path = RequestPath::parse("/blog/my-post");
        assert_eq!(path.strip_section("/blog/"), Some("my-post"));
        assert_eq!(path.strip_section("/features/"), None);
        assert_eq!(RequestPath::parse("/blog").strip_section("/blog/"), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("https://a.com", "/x"), "https://a.com/x");
        assert_eq!(join("https://a.com/", "/x"), "https://a.com/x");
        assert_eq!(join("https://a.com", "x"), "https://a.com/x");
        assert_eq!(join("https://a.com/", "/"), "https://a.com/");
        assert_eq!(join("https://a.com", ""), "https://a.com");
    }
}
