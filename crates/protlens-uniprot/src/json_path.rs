//! Safe navigation through loosely shaped JSON
//!
//! UniProt entries omit whole sub-objects when an annotation is missing, so
//! every lookup in the normalizer goes through these helpers instead of
//! indexing directly. A missing key, a `null`, or a value of the wrong type
//! all collapse to the caller's default.

use serde_json::Value;

/// Follow `path` through nested objects.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(key))
}

/// String at `path`, or `default` when absent or not a string.
pub fn get_str(value: &Value, path: &[&str], default: &str) -> String {
    get_path(value, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Array at `path`, or an empty slice when absent or not an array.
pub fn get_array<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    get_path(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
