//! Value encoders
//!
//! Each encoder owns one value shape. The serializer asks encoders, in
//! registration order, whether they accept a value; the first one that does
//! turns it into zero or more key/value pairs.

pub mod array;
pub mod boolean;
pub mod date;
pub mod empty;
pub mod primitive;

pub use array::PrimitiveArrayEncoder;
pub use boolean::BooleanEncoder;
pub use date::DateEncoder;
pub use empty::EmptyEncoder;
pub use primitive::PrimitiveEncoder;

use crate::pair::KeyValuePair;
use crate::value::ParamValue;

/// Defines the contract for a value encoder.
///
/// Implementations must be free of side effects: one encoder instance is
/// shared by every serializer that holds it, possibly across threads.
pub trait ValueEncoder: Send + Sync {
    /// Whether this encoder is responsible for `value`.
    ///
    /// Decided from the value's shape only, never from the key.
    fn can_encode(&self, value: &ParamValue) -> bool;

    /// Produce the pairs for `value` stored under `key`.
    ///
    /// Only called with values that passed [`ValueEncoder::can_encode`];
    /// any other value yields no pairs.
    fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
