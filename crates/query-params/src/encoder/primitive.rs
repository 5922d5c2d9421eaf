use super::ValueEncoder;
use crate::format::{encode_component, number_to_string};
use crate::pair::KeyValuePair;
use crate::value::ParamValue;

/// Strings and finite numbers, percent-encoded
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveEncoder;

impl ValueEncoder for PrimitiveEncoder {
    fn can_encode(&self, value: &ParamValue) -> bool {
        match value {
            ParamValue::String(_) => true,
            ParamValue::Number(n) => n.is_finite(),
            _ => false,
        }
    }

    fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair> {
        let text = match value {
            ParamValue::String(s) => encode_component(s),
            ParamValue::Number(n) if n.is_finite() => encode_component(&number_to_string(*n)),
            _ => return Vec::new(),
        };
        vec![KeyValuePair::new(key, text)]
    }

    fn name(&self) -> &'static str {
        "primitive"
    }
}
