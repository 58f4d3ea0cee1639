use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder shown for any field the API did not report.
pub const UNAVAILABLE: &str = "unavailable";

/// A leaf value read from an externally defined JSON record.
///
/// Lookups never fail: an absent key (or an explicit `null`) becomes
/// [`FieldValue::Missing`], which displays as [`UNAVAILABLE`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Present(Value),
    Missing,
}

impl FieldValue {
    pub fn lookup(map: &Map<String, Value>, key: &str) -> Self {
        Self::from_optional(map.get(key))
    }

    /// Reads `key` from `value` when it is an object.
    pub fn lookup_in(value: &Value, key: &str) -> Self {
        Self::from_optional(value.get(key))
    }

    pub fn from_optional(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(v) => Self::Present(v.clone()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str(UNAVAILABLE),
            Self::Present(Value::String(s)) => f.write_str(s),
            Self::Present(Value::Number(n)) => write!(f, "{n}"),
            Self::Present(Value::Bool(b)) => write!(f, "{b}"),
            Self::Present(other) => write!(f, "{other}"),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::from_optional(Some(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_present_and_missing() {
        let map = json!({"a": "0xabc", "b": 18, "c": null})
            .as_object()
            .cloned()
            .unwrap();

        assert_eq!(FieldValue::lookup(&map, "a").to_string(), "0xabc");
        assert_eq!(FieldValue::lookup(&map, "b").to_string(), "18");
        assert!(FieldValue::lookup(&map, "c").is_missing());
        assert!(FieldValue::lookup(&map, "zzz").is_missing());
        assert_eq!(FieldValue::lookup(&map, "zzz").to_string(), UNAVAILABLE);
    }

    #[test]
    fn test_lookup_in_non_object() {
        assert!(FieldValue::lookup_in(&json!([1, 2]), "a").is_missing());
        assert!(FieldValue::lookup_in(&json!("text"), "a").is_missing());
    }

    #[test]
    fn test_display_numbers_and_nested() {
        assert_eq!(FieldValue::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(FieldValue::from(json!(true)).to_string(), "true");
        assert_eq!(FieldValue::from(json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn test_serialize_missing_as_null() {
        let json = serde_json::to_string(&vec![FieldValue::Missing, FieldValue::from(json!(3))])
            .unwrap();
        assert_eq!(json, "[null,3]");
    }
}
