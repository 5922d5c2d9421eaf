//! Query string serialization with pluggable value encoders
//!
//! Turns an ordered mapping of parameter names to heterogeneous values into a
//! URL query string. Each value is routed to the first encoder in an ordered
//! chain that accepts it:
//!
//! | Encoder                   | Accepts                              | Emits                      |
//! |---------------------------|--------------------------------------|----------------------------|
//! | [`PrimitiveEncoder`]      | strings, finite numbers              | `key=percent-encoded`      |
//! | [`BooleanEncoder`]        | booleans                             | `key=true` / `key=false`   |
//! | [`DateEncoder`]           | valid dates                          | `key=DD-MM-YYYY`           |
//! | [`PrimitiveArrayEncoder`] | arrays of strings and numbers        | `key=a&key=b` per element  |
//! | [`EmptyEncoder`]          | null                                 | nothing                    |
//!
//! ## Usage
//!
//! ```rust
//! use query_params::{default_serializer, params};
//!
//! let query = default_serializer()
//!     .serialize(&params! { "name" => "hello world", "ids" => [1, 2] }, true)
//!     .unwrap();
//! assert_eq!(query, "?name=hello%20world&ids=1&ids=2");
//! ```
//!
//! Custom encoders implement [`ValueEncoder`] and are placed in the chain
//! ahead of the built-in they should take precedence over.

pub mod config;
pub mod encoder;
pub mod error;
pub mod format;
pub mod pair;
pub mod serializer;
pub mod value;

pub use config::{EncoderKind, SerializerConfig};
pub use encoder::{
    BooleanEncoder, DateEncoder, EmptyEncoder, PrimitiveArrayEncoder, PrimitiveEncoder,
    ValueEncoder,
};
pub use error::{QueryParamError, Result};
pub use pair::KeyValuePair;
pub use serializer::{QueryParamSerializer, QueryParamSerializerBuilder, default_serializer};
pub use value::{DateValue, ParamValue, Params};
