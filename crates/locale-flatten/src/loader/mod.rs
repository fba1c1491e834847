//! Document loader — parse a locale message document from JSON text.
//!
//! Parsing goes through a hand-written deserializer rather than a plain
//! `serde_json::Value` round so that ill-formed documents are rejected with
//! positioned errors before the flattener ever sees them:
//! - duplicate keys within an object (a plain `Value` parse would silently
//!   keep the last occurrence),
//! - array values (the data model is nested objects with scalar leaves),
//! - a non-object root.
//!
//! Key insertion order is preserved; the flattener's first-seen-value
//! tie-breaks depend on it.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Errors produced while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Syntax errors, duplicate keys, and array values, with the offending
    /// line and column.
    #[error("invalid document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The top-level JSON value is not an object.
    #[error("document root must be an object")]
    NonObjectRoot,
}

/// Parse JSON text into an order-preserving message tree.
///
/// # Errors
///
/// Rejects malformed JSON, duplicate keys, array values, and non-object
/// roots. The parser's recursion limit also bounds nesting depth, so the
/// returned tree is always safe to flatten.
///
/// # Example
///
/// ```
/// use locale_flatten::loader::parse_document;
///
/// let doc = parse_document(r#"{"home": {"title": "Tracker"}}"#).unwrap();
/// assert_eq!(doc["home"]["title"], "Tracker");
///
/// assert!(parse_document(r#"[1, 2]"#).is_err());
/// assert!(parse_document(r#"{"a": 1, "a": 2}"#).is_err());
/// ```
pub fn parse_document(src: &str) -> Result<Map<String, Value>, DocumentError> {
    let node: Node = serde_json::from_str(src)?;
    match node.0 {
        Value::Object(map) => Ok(map),
        _ => Err(DocumentError::NonObjectRoot),
    }
}

/// A message-tree node: a nested object or a scalar leaf.
struct Node(Value);

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object or a scalar value")
    }

    fn visit_unit<E>(self) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::Null))
    }

    fn visit_bool<E>(self, v: bool) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::Bool(v)))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::Number(v.into())))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::Number(v.into())))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Node, E>
    where
        E: de::Error,
    {
        match Number::from_f64(v) {
            Some(n) => Ok(Node(Value::Number(n))),
            None => Err(de::Error::custom("non-finite number")),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::String(v.to_owned())))
    }

    fn visit_string<E>(self, v: String) -> Result<Node, E>
    where
        E: de::Error,
    {
        Ok(Node(Value::String(v)))
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        Err(de::Error::custom("array values are not supported"))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some(key) = access.next_key::<String>()? {
            let value: Node = access.next_value()?;
            if map.insert(key.clone(), value.0).is_some() {
                return Err(de::Error::custom(format!("duplicate key `{key}`")));
            }
        }
        Ok(Node(Value::Object(map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_document() {
        let doc = parse_document(
            r#"{"navigation": {"home": "Home"}, "common": {"save": "Save"}}"#,
        )
        .unwrap();

        assert_eq!(doc["navigation"]["home"], "Home");
        assert_eq!(doc["common"]["save"], "Save");
    }

    #[test]
    fn parses_all_scalar_leaf_types() {
        let doc = parse_document(
            r#"{"s": "x", "n": 3, "f": 1.5, "neg": -2, "b": true, "z": null}"#,
        )
        .unwrap();

        assert_eq!(doc["s"], "x");
        assert_eq!(doc["n"], 3);
        assert_eq!(doc["f"], 1.5);
        assert_eq!(doc["neg"], -2);
        assert_eq!(doc["b"], true);
        assert_eq!(doc["z"], Value::Null);
    }

    #[test]
    fn preserves_key_order() {
        let doc = parse_document(r#"{"b": 1, "a": 2, "c": {"z": 3, "y": 4}}"#).unwrap();

        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);

        let nested: Vec<&str> = doc["c"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(nested, vec!["z", "y"]);
    }

    #[test]
    fn rejects_duplicate_key_at_top_level() {
        let err = parse_document(r#"{"save": "A", "save": "B"}"#).unwrap_err();

        assert!(matches!(err, DocumentError::Parse(_)));
        assert!(err.to_string().contains("duplicate key `save`"));
    }

    #[test]
    fn rejects_duplicate_key_nested() {
        let err = parse_document(r#"{"home": {"a": 1, "a": 2}}"#).unwrap_err();

        assert!(err.to_string().contains("duplicate key `a`"));
    }

    #[test]
    fn rejects_array_value() {
        let err = parse_document(r#"{"items": [1, 2, 3]}"#).unwrap_err();

        assert!(matches!(err, DocumentError::Parse(_)));
        assert!(err.to_string().contains("array values are not supported"));
    }

    #[test]
    fn rejects_array_root() {
        let err = parse_document(r#"[{"a": 1}]"#).unwrap_err();

        assert!(err.to_string().contains("array values are not supported"));
    }

    #[test]
    fn rejects_scalar_root() {
        let err = parse_document(r#""just a string""#).unwrap_err();

        assert!(matches!(err, DocumentError::NonObjectRoot));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_document(r#"{"a": "#).unwrap_err();

        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn empty_object_is_a_valid_document() {
        let doc = parse_document("{}").unwrap();
        assert!(doc.is_empty());
    }
}
