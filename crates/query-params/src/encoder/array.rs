use super::{PrimitiveEncoder, ValueEncoder};
use crate::pair::KeyValuePair;
use crate::value::ParamValue;
use std::sync::Arc;

/// Arrays of primitives, one pair per element under the repeated key.
///
/// Element eligibility and element formatting are both delegated to the
/// injected element encoder, so array items are rendered exactly like
/// scalar values. An empty array is accepted and yields no pairs.
#[derive(Clone)]
pub struct PrimitiveArrayEncoder {
    element: Arc<dyn ValueEncoder>,
}

impl PrimitiveArrayEncoder {
    pub fn new(element: Arc<dyn ValueEncoder>) -> Self {
        Self { element }
    }
}

impl Default for PrimitiveArrayEncoder {
    fn default() -> Self {
        Self::new(Arc::new(PrimitiveEncoder))
    }
}

impl std::fmt::Debug for PrimitiveArrayEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimitiveArrayEncoder")
            .field("element", &self.element.name())
            .finish()
    }
}

impl ValueEncoder for PrimitiveArrayEncoder {
    fn can_encode(&self, value: &ParamValue) -> bool {
        match value {
            ParamValue::Array(items) => items.iter().all(|item| self.element.can_encode(item)),
            _ => false,
        }
    }

    fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair> {
        let ParamValue::Array(items) = value else {
            return Vec::new();
        };
        items
            .iter()
            .flat_map(|item| self.element.encode(item, key))
            .collect()
    }

    fn name(&self) -> &'static str {
        "primitive_array"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Params;

    #[test]
    fn test_accepts_string_and_number_arrays() {
        let encoder = PrimitiveArrayEncoder::default();
        assert!(encoder.can_encode(&vec!["a", "b"].into()));
        assert!(encoder.can_encode(&vec![1, 2, 3].into()));
    }

    #[test]
    fn test_accepts_empty_array() {
        let encoder = PrimitiveArrayEncoder::default();
        assert!(encoder.can_encode(&ParamValue::Array(vec![])));
    }

    #[test]
    fn test_accepts_mixed_string_number_array() {
        let encoder = PrimitiveArrayEncoder::default();
        let mixed = ParamValue::Array(vec![1.into(), "two".into(), 3.into()]);
        assert!(encoder.can_encode(&mixed));
    }

    #[test]
    fn test_rejects_arrays_with_other_types() {
        let encoder = PrimitiveArrayEncoder::default();
        assert!(!encoder.can_encode(&vec![true, false].into()));
        assert!(!encoder.can_encode(&ParamValue::Array(vec![ParamValue::Null])));
        assert!(!encoder.can_encode(&ParamValue::Array(vec![Params::new().into()])));
        assert!(!encoder.can_encode(&ParamValue::Array(vec![1.into(), ParamValue::Null])));
        assert!(!encoder.can_encode(&ParamValue::Array(vec![vec![1].into()])));
        assert!(!encoder.can_encode(&vec![1.0, f64::NAN].into()));
    }

    #[test]
    fn test_rejects_non_arrays() {
        let encoder = PrimitiveArrayEncoder::default();
        assert!(!encoder.can_encode(&"not an array".into()));
        assert!(!encoder.can_encode(&123.into()));
        assert!(!encoder.can_encode(&ParamValue::Null));
    }

    #[test]
    fn test_repeats_key_per_element() {
        let encoder = PrimitiveArrayEncoder::default();
        assert_eq!(
            encoder.encode(&vec![1, 2, 3].into(), "ids"),
            vec![
                KeyValuePair::new("ids", "1"),
                KeyValuePair::new("ids", "2"),
                KeyValuePair::new("ids", "3"),
            ]
        );
    }

    #[test]
    fn test_encodes_string_elements() {
        let encoder = PrimitiveArrayEncoder::default();
        assert_eq!(
            encoder.encode(&vec!["a b", "c&d"].into(), "tags"),
            vec![
                KeyValuePair::new("tags", "a%20b"),
                KeyValuePair::new("tags", "c%26d"),
            ]
        );
    }

    #[test]
    fn test_empty_array_yields_no_pairs() {
        let encoder = PrimitiveArrayEncoder::default();
        assert!(encoder.encode(&ParamValue::Array(vec![]), "arr").is_empty());
    }

    #[test]
    fn test_element_encoder_is_injected() {
        struct Upper;

        impl ValueEncoder for Upper {
            fn can_encode(&self, value: &ParamValue) -> bool {
                matches!(value, ParamValue::String(_))
            }

            fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair> {
                match value {
                    ParamValue::String(s) => vec![KeyValuePair::new(key, s.to_uppercase())],
                    _ => Vec::new(),
                }
            }

            fn name(&self) -> &'static str {
                "upper"
            }
        }

        let encoder = PrimitiveArrayEncoder::new(Arc::new(Upper));
        assert!(!encoder.can_encode(&vec![1, 2].into()));
        assert_eq!(
            encoder.encode(&vec!["a", "b"].into(), "k"),
            vec![KeyValuePair::new("k", "A"), KeyValuePair::new("k", "B")]
        );
    }
}
