//! Internal coercion primitives for loosely-typed document fields.
//!
//! All functions are total: malformed input degrades to the supplied
//! default, never to an error. This module is `pub(crate)` so that
//! [`crate::normalize`] and [`crate::resolve`] share the same low-level
//! routines without exposing them as part of the public API.

use serde_json::Value;

/// Coerces a field to `f64`: numbers pass through, numeric strings are
/// parsed, everything else (including NaN-producing garbage) yields
/// `default`.
pub(crate) fn number_or(value: Option<&Value>, default: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(default),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(default),
        _ => default,
    }
}

/// Coerces a field to a non-empty string, falling back to `default`.
/// Empty strings count as absent — a placeholder beats blank UI text.
pub(crate) fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// Returns the string elements of an array field, or empty when the field
/// is not actually an array. Non-string elements are dropped.
pub(crate) fn string_array(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerces a stock-like field to a non-negative integer. Negative and
/// fractional values truncate toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn count_or_zero(value: Option<&Value>) -> u32 {
    let n = number_or(value, 0.0);
    if n <= 0.0 {
        0
    } else {
        n.floor().min(f64::from(u32::MAX)) as u32
    }
}

/// Normalizes a product-type field: take the first element if it is an
/// array, stringify whatever remains, return `"unknown"` when nullish.
///
/// Upstream stores this field as a string, a number, an array of either,
/// or not at all — observed variation, not a hypothetical.
pub(crate) fn product_type_of(value: Option<&Value>, unknown: &str) -> String {
    match value {
        Some(Value::Array(items)) => product_type_of(items.first(), unknown),
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => unknown.to_string(),
    }
}

/// Stringifies an id-like value when it is "truthy": non-empty strings and
/// nonzero numbers qualify; `0`, `""`, `null`, objects, and arrays do not.
pub(crate) fn truthy_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if number_is_truthy(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_is_truthy(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f != 0.0)
}
