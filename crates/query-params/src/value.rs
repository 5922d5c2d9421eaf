//! Parameter values and the ordered parameter mapping
//!
//! [`ParamValue`] is the closed set of shapes a caller can hand to the
//! serializer. Shapes that no default encoder accepts (plain objects,
//! non-finite numbers, invalid dates, arrays of non-primitives) are still
//! representable so that they can be rejected with a diagnostic instead of
//! silently dropped.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;

/// A calendar instant in local wall-clock fields, or the invalid instant.
///
/// The invalid instant mirrors a date constructed from unparseable input: it
/// is still a date-shaped value, but no encoder should accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateValue(Option<NaiveDateTime>);

impl DateValue {
    /// Local midnight of the given calendar day; invalid if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(hour, min, sec)))
    }

    pub const fn invalid() -> Self {
        Self(None)
    }

    pub fn now() -> Self {
        Self(Some(Local::now().naive_local()))
    }

    /// Parse RFC 3339, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`.
    ///
    /// Offset-carrying input is converted to the local zone; the other forms
    /// are taken as local wall-clock time. Anything else yields the invalid
    /// date rather than an error.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return dt.into();
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
            return dt.into();
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return d.into();
        }
        Self::invalid()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Local calendar fields, `None` for the invalid date
    pub fn local(&self) -> Option<NaiveDateTime> {
        self.0
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        Self(Some(value))
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        Self(value.and_hms_opt(0, 0, 0))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self(Some(value.with_timezone(&Local).naive_local()))
    }
}

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// null, undefined or absent
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateValue),
    Array(Vec<ParamValue>),
    /// A keyed structure; never accepted by the default encoders
    Object(Params),
}

impl ParamValue {
    /// Shape name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(n) if n.is_finite() => "number",
            Self::Number(_) => "non-finite number",
            Self::String(_) => "string",
            Self::Date(d) if d.is_valid() => "date",
            Self::Date(_) => "invalid date",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateValue> for ParamValue {
    fn from(value: DateValue) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.into())
    }
}

impl From<NaiveDateTime> for ParamValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value.into())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParamValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Date(value.into())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<ParamValue>> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::Array(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        Self::Object(value)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers outside f64
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Self::Object(map.into_iter().collect()),
        }
    }
}

impl From<&serde_json::Value> for ParamValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(items.iter().map(Into::into).collect()),
            Value::Object(map) => Self::Object(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
        }
    }
}

/// Ordered mapping of parameter names to values.
///
/// Iteration order is insertion order. Re-inserting an existing key replaces
/// its value in place, keeping the key's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: IndexMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style [`Params::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut params = Params::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = indexmap::map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a [`Params`] from `key => value` entries, in order.
///
/// ```
/// use query_params::params;
///
/// let params = params! { "name" => "hello", "count" => 42 };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($key, $value);
        )+
        params
    }};
}
