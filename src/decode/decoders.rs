//! JSON record decoder

use crate::error::{Error, Result};
use serde_json::Value;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// JSONPath to extract records
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// The configured record path, if any
    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }

    /// Parse a raw body and extract its records
    pub fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.decode_value(&value)
    }

    /// Extract records from an already parsed body
    pub fn decode_value(&self, value: &Value) -> Result<Vec<Value>> {
        match &self.record_path {
            Some(path) => extract_records(value, path),
            None => match value {
                Value::Array(arr) => Ok(arr.clone()),
                _ => Ok(vec![value.clone()]),
            },
        }
    }
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Extract every value matched by `path`
///
/// Wildcard paths go through `jsonpath-rust`; plain dot paths are walked
/// directly. A path that matches nothing yields an empty vector.
pub fn extract_records(value: &Value, path: &str) -> Result<Vec<Value>> {
    if path.contains('*') {
        return extract_with_jsonpath(value, path);
    }

    match extract_simple_path(value, path) {
        Some(Value::Array(arr)) => Ok(arr),
        Some(Value::Null) | None => Ok(vec![]),
        Some(v) => Ok(vec![v]),
    }
}

/// Extract a scalar at a dot path as a string
///
/// Returns `None` for missing fields, `null`, arrays and objects.
pub fn extract_string(value: &Value, path: &str) -> Option<String> {
    match extract_simple_path(value, path)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.trim_start_matches('$').trim_start_matches('.');
    if path.is_empty() {
        return Some(value.clone());
    }

    let mut current = value;
    for part in path.split('.') {
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].trim_end_matches(']');

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index = index_str.parse::<usize>().ok()?;
            current = current.as_array()?.get(index)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}

fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath '{path}': {e}")))?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
