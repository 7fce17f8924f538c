//! Loosely-typed entity data from a content source.
//!
//! A blog post or product record arrives as a JSON object whose field names
//! follow the content API (`featuredImage`, `publishedAt`, `inStock`, ...).
//! Every accessor is lenient: a missing field, an empty string or a value of
//! the wrong JSON type all read as "absent" so the resolver can fall back
//! field by field.

use super::JsonMap;
use crate::debug;
use serde_json::Value;
use thiserror::Error;

/// Entity data could not be turned into a record at all.
#[derive(Debug, Error)]
pub enum EntityError {
    #[error("entity data is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("entity data must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// A resolved entity record (blog post, product, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityData(JsonMap);

impl EntityData {
    pub fn new(map: JsonMap) -> Self {
        Self(map)
    }

    /// Accept any JSON value, rejecting non-objects.
    pub fn from_value(value: Value) -> Result<Self, EntityError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(EntityError::NotAnObject(json_type(&other))),
        }
    }

    /// Parse from JSON text.
    pub fn from_json(text: &str) -> Result<Self, EntityError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Non-empty string field.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::String(_) | Value::Null => None,
            other => mismatch(key, "string", other),
        }
    }

    /// String or number field, numbers rendered as written.
    ///
    /// Prices come as `"19"` from some sources and `19.99` from others.
    pub fn scalar(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Number(n) => Some(n.to_string()),
            _ => self.text(key),
        }
    }

    /// Array of strings. Non-string items are dropped, an empty array reads
    /// as absent.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.0.get(key)? {
            Value::Array(items) => {
                let list: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
                        _ => None,
                    })
                    .collect();
                (!list.is_empty()).then_some(list)
            }
            Value::Null => None,
            other => mismatch(key, "array", other),
        }
    }

    /// Boolean field.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Null => None,
            other => mismatch(key, "boolean", other),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<JsonMap> for EntityData {
    fn from(map: JsonMap) -> Self {
        Self(map)
    }
}

fn mismatch<T>(key: &str, expected: &str, found: &Value) -> Option<T> {
    debug!("resolve"; "entity field `{}`: expected {}, found {}, ignoring", key, expected, json_type(found));
    None
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> EntityData {
        EntityData::from_value(value).unwrap()
    }

    #[test]
    fn test_text() {
        let data = entity(json!({"title": "Hello", "empty": "  ", "num": 3, "nil": null}));
        assert_eq!(data.text("title").as_deref(), Some("Hello"));
        assert_eq!(data.text("empty"), None);
        assert_eq!(data.text("num"), None);
        assert_eq!(data.text("nil"), None);
        assert_eq!(data.text("missing"), None);
    }

    #[test]
    fn test_scalar_accepts_numbers() {
        let data = entity(json!({"a": "19", "b": 29.99, "c": 5, "d": true}));
        assert_eq!(data.scalar("a").as_deref(), Some("19"));
        assert_eq!(data.scalar("b").as_deref(), Some("29.99"));
        assert_eq!(data.scalar("c").as_deref(), Some("5"));
        assert_eq!(data.scalar("d"), None);
    }

    #[test]
    fn test_list() {
        let data = entity(json!({
            "tags": ["tips", 1, "", "workflow"],
            "empty": [],
            "wrong": "tips"
        }));
        assert_eq!(data.list("tags"), Some(vec!["tips".into(), "workflow".into()]));
        assert_eq!(data.list("empty"), None);
        assert_eq!(data.list("wrong"), None);
    }

    #[test]
    fn test_flag() {
        let data = entity(json!({"inStock": true, "noIndex": "yes"}));
        assert_eq!(data.flag("inStock"), Some(true));
        assert_eq!(data.flag("noIndex"), None);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            EntityData::from_value(json!([1, 2])),
            Err(EntityError::NotAnObject("array"))
        ));
        assert!(matches!(
            EntityData::from_json("{not json"),
            Err(EntityError::Json(_))
        ));
        assert!(EntityData::from_json(r#"{"name": "Pro Plan"}"#).is_ok());
    }
}
