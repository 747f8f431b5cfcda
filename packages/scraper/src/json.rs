//! Helpers for reading loosely typed feed JSON.

use serde_json::Value;

use crate::types::Record;

/// Render a scalar as a map key / comparison string.
///
/// Strings are returned as is and numbers in decimal form. Anything else has
/// no key form.
///
/// # Examples
/// ```
/// use rugby_scraper::json::key_string;
/// use serde_json::json;
///
/// assert_eq!(key_string(&json!(2026)), Some("2026".to_string()));
/// assert_eq!(key_string(&json!("2026")), Some("2026".to_string()));
/// assert_eq!(key_string(&json!(null)), None);
/// ```
pub fn key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Whether a field carries no usable value.
///
/// Missing, `null`, `false`, `0`, `""`, `[]` and `{}` are all blank. Feeds
/// use every one of these to mean "not set".
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Whether a flag field is set.
pub fn is_set(value: Option<&Value>) -> bool {
    !is_blank(value)
}

/// Read a string field and trim it; non-strings read as empty.
pub fn trimmed_str(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Copy of `record` without `keys`, keeping the remaining field order.
pub fn without_keys(record: &Record, keys: &[&str]) -> Record {
    record
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Collect the objects of a JSON array.
///
/// A missing or non-array value yields an empty list. Elements that are not
/// objects are dropped.
pub fn records(value: Option<&Value>, context: &str) -> Vec<Record> {
    let Some(value) = value else {
        tracing::debug!(context, "List missing, treating as empty");
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        tracing::warn!(context, "Expected a list, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(record) => Some(record.clone()),
            other => {
                tracing::warn!(context, value = %other, "Skipping non-object entry");
                None
            }
        })
        .collect()
}

/// Field value or a default string when missing.
pub fn or_empty(record: &Record, key: &str) -> Value {
    record
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}
