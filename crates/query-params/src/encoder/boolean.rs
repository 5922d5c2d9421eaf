use super::ValueEncoder;
use crate::pair::KeyValuePair;
use crate::value::ParamValue;

/// Booleans as `true` / `false`
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanEncoder;

impl ValueEncoder for BooleanEncoder {
    fn can_encode(&self, value: &ParamValue) -> bool {
        matches!(value, ParamValue::Bool(_))
    }

    fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair> {
        match value {
            ParamValue::Bool(b) => vec![KeyValuePair::new(key, if *b { "true" } else { "false" })],
            _ => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "boolean"
    }
}
