use super::ValueEncoder;
use crate::error::{QueryParamError, Result};
use crate::format::encode_component;
use crate::pair::KeyValuePair;
use crate::value::ParamValue;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Default date layout: `DD-MM-YYYY`
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Valid dates, rendered from their local calendar fields.
///
/// The default layout writes the year as a plain integer (`02-01-99`,
/// `02-01-10000`) rather than chrono's padded, signed `%Y`. Custom layouts are
/// chrono strftime patterns, trial-rendered at construction so a constructed
/// encoder never fails to format a date.
#[derive(Debug, Clone)]
pub struct DateEncoder {
    format: String,
}

impl DateEncoder {
    pub fn new() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Encoder with a custom strftime pattern, e.g. `%Y-%m-%d`
    pub fn with_format(format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        validate_format(&format).map_err(QueryParamError::Config)?;
        Ok(Self { format })
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for DateEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueEncoder for DateEncoder {
    fn can_encode(&self, value: &ParamValue) -> bool {
        matches!(value, ParamValue::Date(d) if d.is_valid())
    }

    fn encode(&self, value: &ParamValue, key: &str) -> Vec<KeyValuePair> {
        let ParamValue::Date(date) = value else {
            return Vec::new();
        };
        let Some(dt) = date.local() else {
            return Vec::new();
        };
        let text = if self.format == DEFAULT_DATE_FORMAT {
            format!("{:02}-{:02}-{}", dt.day(), dt.month(), dt.year())
        } else {
            // validated by with_format, so Display cannot fail here
            dt.format(&self.format).to_string()
        };
        vec![KeyValuePair::new(key, encode_component(&text))]
    }

    fn name(&self) -> &'static str {
        "date"
    }
}

fn render(dt: &NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(format)).ok()?;
    Some(out)
}

/// Check that `format` is non-empty and renders a naive (offset-less) date.
pub(crate) fn validate_format(format: &str) -> std::result::Result<(), String> {
    if format.is_empty() {
        return Err("date format must not be empty".to_string());
    }
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| "failed to build sample date".to_string())?;
    match render(&sample, format) {
        Some(_) => Ok(()),
        None => Err(format!("invalid date format `{format}`")),
    }
}
