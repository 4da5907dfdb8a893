//! Field coalescing over loosely-shaped upstream JSON.
//!
//! Upstream feeds rename fields between versions, so every normalizer looks
//! a value up under several candidate keys and takes the first one that is
//! present. "Present" follows the feeds' own conventions: `null`, `false`,
//! `0` and the empty string all count as missing.

use serde_json::Value;

/// Extract the list of records from an upstream document
///
/// A top-level array is used as-is. Otherwise the first of `keys` holding an
/// array wins, and anything else is treated as a single record.
pub fn records<'a>(raw: &'a Value, keys: &[&str]) -> Vec<&'a Value> {
    if let Some(items) = raw.as_array() {
        return items.iter().collect();
    }

    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_array))
        .map(|items| items.iter().collect())
        .unwrap_or_else(|| vec![raw])
}

/// Whether a value counts as present
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// First present value among `keys`
pub fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_present(value))
}

/// First present value among `keys` rendered as text
pub fn text(record: &Value, keys: &[&str]) -> Option<String> {
    first_present(record, keys).map(render)
}

/// First present value among `keys` as a number, `0.0` when absent or unparseable
pub fn number(record: &Value, keys: &[&str]) -> f64 {
    first_present(record, keys).map(to_number).unwrap_or(0.0)
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_float(s),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    }
}

/// Parse the longest numeric prefix of `s`, e.g. `"12.5 aUEC"` -> `12.5`
///
/// An exponent (`1e3`, `2E-2`) is part of the prefix only when at least one
/// digit follows the marker.
pub fn parse_leading_float(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, b) in trimmed.bytes().enumerate() {
        match b {
            b'+' | b'-' if i == 0 => {}
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return 0.0;
    }

    let mantissa = trimmed[..end].trim_end_matches('.');
    let exponent = &trimmed[end..end + exponent_len(&trimmed[end..])];

    format!("{}{}", mantissa, exponent)
        .parse::<f64>()
        .unwrap_or(0.0)
}

fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let mut len = 1;
    if matches!(bytes.get(len), Some(b'+' | b'-')) {
        len += 1;
    }

    match bytes[len..].iter().take_while(|b| b.is_ascii_digit()).count() {
        0 => 0,
        digits => len + digits,
    }
}

/// Format `value` with exactly `digits` decimals, rounding ties away from zero
///
/// `format!` rounds an exact tie such as `0.125` or `12.5` to even, which the
/// front end does not expect. A tie can only happen when the binary value has
/// at most `digits + 1` fractional bits, so those are detected exactly and
/// nudged outward before formatting. Values merely close to a tie (`1.005`
/// is stored as `1.00499...`) keep their nearest rounding.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    let precision = digits as i32;
    let is_tie = (magnitude * 2f64.powi(precision + 1)).fract() == 0.0
        && format!("{:.*}", digits + 1, magnitude).ends_with('5');
    let magnitude = if is_tie {
        magnitude + 10f64.powi(-(precision + 2))
    } else {
        magnitude
    };

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{:.*}", sign, digits, magnitude)
}
