//! One `key=value` emission

use serde::Serialize;
use std::fmt;

/// An immutable key/value pair produced by an encoder.
///
/// `value` is already in its final, percent-encoded form; the serializer
/// joins pairs without re-encoding them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyValuePair {
    key: String,
    value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for KeyValuePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KeyValuePair::new("q", "a%20b").to_string(), "q=a%20b");
        assert_eq!(KeyValuePair::new("empty", "").to_string(), "empty=");
    }

    #[test]
    fn test_serializes_as_object() {
        let json = serde_json::to_value(KeyValuePair::new("ids", "1")).unwrap();
        assert_eq!(json, serde_json::json!({"key": "ids", "value": "1"}));
    }
}
