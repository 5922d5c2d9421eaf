use super::ValueEncoder;
use crate::pair::KeyValuePair;
use crate::value::ParamValue;

/// Null / absent values; contributes nothing to the output
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEncoder;

impl ValueEncoder for EmptyEncoder {
    fn can_encode(&self, value: &ParamValue) -> bool {
        value.is_null()
    }

    fn encode(&self, _value: &ParamValue, _key: &str) -> Vec<KeyValuePair> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "empty"
    }
}
