//! Error types for query string serialization

use thiserror::Error;

/// Result type alias for serializer operations
pub type Result<T> = std::result::Result<T, QueryParamError>;

/// Errors surfaced by [`QueryParamSerializer`](crate::QueryParamSerializer)
/// and its configuration layer.
///
/// Serialization is all-or-nothing: whenever one of these is returned, no
/// partial query string was produced.
#[derive(Error, Debug)]
pub enum QueryParamError {
    /// The parameters argument was not a keyed mapping (null, array, primitive, ...)
    #[error("Invalid input: query parameters must be a keyed mapping, found {found}")]
    InvalidInput { found: &'static str },

    /// No registered encoder accepted the value stored under `key`
    #[error("Missing encoder: no encoder accepts a value of type `{kind}` (parameter `{key}`)")]
    MissingEncoder { key: String, kind: &'static str },

    /// A serde value could not be turned into parameters
    #[error("Conversion error: {0}")]
    Conversion(#[from] serde_json::Error),

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QueryParamError {
    /// True for [`QueryParamError::InvalidInput`]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// True for [`QueryParamError::MissingEncoder`]
    pub fn is_missing_encoder(&self) -> bool {
        matches!(self, Self::MissingEncoder { .. })
    }
}

impl From<toml::de::Error> for QueryParamError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("TOML parse error: {err}"))
    }
}
