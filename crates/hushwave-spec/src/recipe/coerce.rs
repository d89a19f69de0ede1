//! Lenient coercion of untrusted JSON values.

use serde_json::Value;

use super::MAX_PRESET_NAME_CHARS;

/// Coerces a JSON value to a finite number.
///
/// Accepts numbers and numeric strings. Everything else, including strings
/// such as `"NaN"` or `"inf"`, yields `None`.
pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Coerces a JSON value to a usable preset name.
pub(crate) fn coerce_name(value: &Value) -> Option<String> {
    let name = value.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.chars().take(MAX_PRESET_NAME_CHARS).collect())
}
