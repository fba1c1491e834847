//! Scalar leaf values.

use serde_json::{Number, Value};

/// A scalar leaf of a message tree: null, boolean, number, or string.
///
/// The flattener distinguishes "nested object" from "leaf" by an explicit
/// discriminant check; `Scalar` is the leaf side of that split. It derives
/// `Eq` and `Hash` so the deduplication index can key on it directly, which
/// makes value equality strict JSON-typed equality: `"1"`, `1`, and `true`
/// are three distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Convert a JSON value into a scalar, if it is one.
    ///
    /// Arrays and objects have no scalar form and return `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_flatten_core::Scalar;
    /// use serde_json::json;
    ///
    /// assert_eq!(Scalar::from_value(&json!("Save")), Some(Scalar::String("Save".to_string())));
    /// assert_eq!(Scalar::from_value(&json!(null)), Some(Scalar::Null));
    /// assert_eq!(Scalar::from_value(&json!([1, 2])), None);
    /// assert_eq!(Scalar::from_value(&json!({"a": 1})), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Scalar> {
        match value {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) => Some(Scalar::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Convert the scalar back into a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Number(n) => Value::Number(n.clone()),
            Scalar::String(s) => Value::String(s.clone()),
        }
    }
}

/// Check whether a JSON value is a scalar leaf.
pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;

    #[test]
    fn test_from_value_scalars() {
        assert_eq!(Scalar::from_value(&json!(null)), Some(Scalar::Null));
        assert_eq!(Scalar::from_value(&json!(true)), Some(Scalar::Bool(true)));
        assert_eq!(
            Scalar::from_value(&json!(42)),
            Some(Scalar::Number(42.into()))
        );
        assert_eq!(
            Scalar::from_value(&json!("Save")),
            Some(Scalar::String("Save".to_string()))
        );
    }

    #[test]
    fn test_from_value_composites() {
        assert_eq!(Scalar::from_value(&json!([])), None);
        assert_eq!(Scalar::from_value(&json!({})), None);
        assert_eq!(Scalar::from_value(&json!({"a": 1})), None);
    }

    #[test]
    fn test_to_value_roundtrip() {
        let values = vec![json!(null), json!(false), json!(1.5), json!("x")];
        for v in values {
            assert_eq!(Scalar::from_value(&v).unwrap().to_value(), v);
        }
    }

    #[test]
    fn test_cross_type_values_distinct() {
        // JSON-typed equality: no cross-type coercion
        assert_ne!(
            Scalar::from_value(&json!("1")),
            Scalar::from_value(&json!(1))
        );
        assert_ne!(
            Scalar::from_value(&json!(0)),
            Scalar::from_value(&json!(false))
        );
        assert_ne!(
            Scalar::from_value(&json!("")),
            Scalar::from_value(&json!(null))
        );
        assert_ne!(
            Scalar::from_value(&json!(1)),
            Scalar::from_value(&json!(true))
        );
    }

    #[test]
    fn test_usable_as_index_key() {
        let mut index: IndexMap<Scalar, String> = IndexMap::new();
        index.insert(Scalar::from_value(&json!("Save")).unwrap(), "save".to_string());
        index.insert(Scalar::from_value(&json!(null)).unwrap(), "empty".to_string());

        assert_eq!(
            index.get(&Scalar::from_value(&json!("Save")).unwrap()),
            Some(&"save".to_string())
        );
        assert_eq!(index.get(&Scalar::from_value(&json!("save")).unwrap()), None);
        assert_eq!(
            index.get(&Scalar::from_value(&json!(null)).unwrap()),
            Some(&"empty".to_string())
        );
    }

    #[test]
    fn test_is_scalar() {
        assert!(is_scalar(&json!(null)));
        assert!(is_scalar(&json!("x")));
        assert!(is_scalar(&json!(3)));
        assert!(!is_scalar(&json!([])));
        assert!(!is_scalar(&json!({})));
    }
}
