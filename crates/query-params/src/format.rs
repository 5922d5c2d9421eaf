//! Text helpers shared by the encoders and the serializer

use crate::pair::KeyValuePair;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped by ECMAScript `encodeURIComponent`.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a URI component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Render a number the way ECMAScript `Number.prototype.toString` does.
///
/// Integral values have no fraction, `-0` is `0`, and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form with an explicit sign (`1e+21`).
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Join pairs into `?k=v&k=v` (or `&k=v...` when not the first segment).
///
/// No pairs yields the empty string regardless of `first`.
pub fn join_pairs(pairs: &[KeyValuePair], first: bool) -> String {
    if pairs.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(pairs.len() * 16);
    out.push(if first { '?' } else { '&' });
    for (i, pair) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(pair.key());
        out.push('=');
        out.push_str(pair.value());
    }
    out
}
