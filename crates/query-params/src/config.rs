//! Serializer configuration
//!
//! Describes an encoder chain declaratively so it can live in a TOML file
//! next to the rest of an application's settings:
//!
//! ```toml
//! encoders = ["boolean", "primitive", "primitive_array", "date", "empty"]
//! date_format = "%Y-%m-%d"
//! ```
//!
//! Every field has a default, so an empty document yields the default chain.

use crate::encoder::date::{DEFAULT_DATE_FORMAT, validate_format};
use crate::encoder::{
    BooleanEncoder, DateEncoder, EmptyEncoder, PrimitiveArrayEncoder, PrimitiveEncoder,
    ValueEncoder,
};
use crate::error::{QueryParamError, Result};
use crate::serializer::QueryParamSerializer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

/// A built-in encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderKind {
    Primitive,
    Boolean,
    Date,
    PrimitiveArray,
    Empty,
}

impl EncoderKind {
    /// Order of the default chain
    pub const DEFAULT_ORDER: [EncoderKind; 5] = [
        EncoderKind::Primitive,
        EncoderKind::Boolean,
        EncoderKind::Date,
        EncoderKind::PrimitiveArray,
        EncoderKind::Empty,
    ];
}

/// Declarative encoder chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerConfig {
    /// Encoders in priority order
    pub encoders: Vec<EncoderKind>,

    /// strftime pattern for the date encoder
    pub date_format: String,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            encoders: EncoderKind::DEFAULT_ORDER.to_vec(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl SerializerConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| QueryParamError::Config(format!("TOML serialize error: {e}")))
    }

    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for kind in &self.encoders {
            if !seen.insert(kind) {
                errors.push(format!("encoder {kind:?} is listed more than once"));
            }
        }

        if let Err(e) = validate_format(&self.date_format) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the serializer this configuration describes.
    ///
    /// The array encoder formats elements through the same primitive encoder
    /// instance used by the chain, whether or not `primitive` is listed.
    pub fn build(&self) -> Result<QueryParamSerializer> {
        self.check()?;

        let primitive: Arc<dyn ValueEncoder> = Arc::new(PrimitiveEncoder);
        let date = DateEncoder::with_format(self.date_format.as_str())?;

        let encoders = self.encoders.iter().map(|kind| -> Arc<dyn ValueEncoder> {
            match kind {
                EncoderKind::Primitive => primitive.clone(),
                EncoderKind::Boolean => Arc::new(BooleanEncoder),
                EncoderKind::Date => Arc::new(date.clone()),
                EncoderKind::PrimitiveArray => {
                    Arc::new(PrimitiveArrayEncoder::new(primitive.clone()))
                }
                EncoderKind::Empty => Arc::new(EmptyEncoder),
            }
        });

        let serializer = QueryParamSerializer::new(encoders);
        tracing::debug!(?serializer, "built serializer from config");
        Ok(serializer)
    }

    fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| QueryParamError::Config(errors.join("; ")))
    }
}

impl FromStr for SerializerConfig {
    type Err = QueryParamError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}
