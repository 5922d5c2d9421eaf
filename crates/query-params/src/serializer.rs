//! Query string serializer
//!
//! Holds an ordered chain of [`ValueEncoder`]s and turns a parameter mapping
//! into a query string. For every entry the first encoder whose
//! [`ValueEncoder::can_encode`] accepts the value wins; chain order, not
//! specificity, decides. Null values are skipped before the chain is
//! consulted.
//!
//! Serialization is all-or-nothing: a value no encoder accepts fails the
//! whole call and no partial query string is returned.

use crate::encoder::{
    BooleanEncoder, DateEncoder, EmptyEncoder, PrimitiveArrayEncoder, PrimitiveEncoder,
    ValueEncoder,
};
use crate::error::{QueryParamError, Result};
use crate::format::join_pairs;
use crate::value::{ParamValue, Params};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Dispatches parameter values to encoders and assembles the query string.
///
/// The encoder chain is fixed at construction; `serialize` takes `&self`
/// and writes no shared state, so one instance can serve concurrent callers.
#[derive(Clone)]
pub struct QueryParamSerializer {
    encoders: Vec<Arc<dyn ValueEncoder>>,
}

impl QueryParamSerializer {
    /// Create a serializer with an explicit, ordered encoder chain
    pub fn new<I>(encoders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn ValueEncoder>>,
    {
        Self {
            encoders: encoders.into_iter().collect(),
        }
    }

    pub fn builder() -> QueryParamSerializerBuilder {
        QueryParamSerializerBuilder::default()
    }

    /// Primitive, boolean, date, primitive array, empty; in that order.
    ///
    /// The array encoder formats its elements through the same primitive
    /// encoder instance that sits first in the chain.
    pub fn default_chain() -> Self {
        let primitive: Arc<dyn ValueEncoder> = Arc::new(PrimitiveEncoder);
        Self::builder()
            .shared_encoder(primitive.clone())
            .encoder(BooleanEncoder)
            .encoder(DateEncoder::new())
            .encoder(PrimitiveArrayEncoder::new(primitive))
            .encoder(EmptyEncoder)
            .build()
    }

    pub fn encoders(&self) -> &[Arc<dyn ValueEncoder>] {
        &self.encoders
    }

    /// Serialize `params` into a query string.
    ///
    /// Returns `""` when no pairs are produced. Otherwise the pairs are
    /// joined with `&` and prefixed with `?` when `first` is true, or `&`
    /// when appending to an existing query string.
    ///
    /// # Errors
    ///
    /// [`QueryParamError::MissingEncoder`] if no encoder accepts a non-null value.
    pub fn serialize(&self, params: &Params, first: bool) -> Result<String> {
        let mut pairs = Vec::with_capacity(params.len());

        for (key, value) in params.iter() {
            if value.is_null() {
                tracing::trace!(key, "skipping null parameter");
                continue;
            }

            let Some(encoder) = self.select(value) else {
                tracing::warn!(key, kind = value.kind(), "no encoder accepts parameter value");
                return Err(QueryParamError::MissingEncoder {
                    key: key.to_string(),
                    kind: value.kind(),
                });
            };

            tracing::trace!(key, encoder = encoder.name(), "encoding parameter");
            pairs.extend(encoder.encode(value, key));
        }

        tracing::debug!(pairs = pairs.len(), first, "serialized query parameters");
        Ok(join_pairs(&pairs, first))
    }

    /// Serialize an untyped value that must be a keyed mapping.
    ///
    /// # Errors
    ///
    /// [`QueryParamError::InvalidInput`] unless `value` is [`ParamValue::Object`],
    /// checked before any encoder runs; otherwise as [`Self::serialize`].
    pub fn serialize_value(&self, value: &ParamValue, first: bool) -> Result<String> {
        match value {
            ParamValue::Object(params) => self.serialize(params, first),
            other => Err(invalid_input(other.kind())),
        }
    }

    /// Serialize a JSON object, keeping its key order.
    ///
    /// # Errors
    ///
    /// [`QueryParamError::InvalidInput`] unless `value` is a JSON object.
    pub fn serialize_json(&self, value: &serde_json::Value, first: bool) -> Result<String> {
        if !value.is_object() {
            return Err(invalid_input(json_kind(value)));
        }
        self.serialize_value(&ParamValue::from(value), first)
    }

    /// Serialize any serde-serializable value; structs become mappings in
    /// field order.
    ///
    /// # Errors
    ///
    /// [`QueryParamError::Conversion`] if serde rejects the value, otherwise
    /// as [`Self::serialize_json`].
    pub fn serialize_struct<T>(&self, value: &T, first: bool) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_value(value)?;
        if !json.is_object() {
            return Err(invalid_input(json_kind(&json)));
        }
        self.serialize_value(&ParamValue::from(json), first)
    }

    fn select(&self, value: &ParamValue) -> Option<&Arc<dyn ValueEncoder>> {
        self.encoders.iter().find(|encoder| encoder.can_encode(value))
    }
}

impl Default for QueryParamSerializer {
    fn default() -> Self {
        Self::default_chain()
    }
}

impl fmt::Debug for QueryParamSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParamSerializer")
            .field(
                "encoders",
                &self.encoders.iter().map(|e| e.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Fluent construction of an encoder chain; encoders keep insertion order.
#[derive(Default)]
pub struct QueryParamSerializerBuilder {
    encoders: Vec<Arc<dyn ValueEncoder>>,
}

impl QueryParamSerializerBuilder {
    pub fn encoder<E>(mut self, encoder: E) -> Self
    where
        E: ValueEncoder + 'static,
    {
        self.encoders.push(Arc::new(encoder));
        self
    }

    /// Append an encoder instance that is also used elsewhere
    pub fn shared_encoder(mut self, encoder: Arc<dyn ValueEncoder>) -> Self {
        self.encoders.push(encoder);
        self
    }

    pub fn build(self) -> QueryParamSerializer {
        QueryParamSerializer::new(self.encoders)
    }
}

static DEFAULT_SERIALIZER: OnceLock<QueryParamSerializer> = OnceLock::new();

/// Process-wide serializer using [`QueryParamSerializer::default_chain`]
pub fn default_serializer() -> &'static QueryParamSerializer {
    DEFAULT_SERIALIZER.get_or_init(QueryParamSerializer::default_chain)
}

fn invalid_input(found: &'static str) -> QueryParamError {
    tracing::warn!(found, "rejecting non-mapping query parameters");
    QueryParamError::InvalidInput { found }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
