// Lookup of API error messages buried at a dotted path in a JSON response

use serde_json::Value;

/// Resolve a dotted path such as `response.ip2asn.0.error` against `value`.
///
/// Numeric segments index into arrays; everything else is an object key.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    let pointer: String = path
        .split('.')
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect();

    value.pointer(&pointer)
}

/// Extract an error message from `value` at `path`.
///
/// Returns `None` when the path is missing or holds an "empty" value
/// (`null`, `false`, `""`, `[]`, `{}`).
pub fn error_message(value: &Value, path: &str) -> Option<String> {
    match lookup(value, path)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
