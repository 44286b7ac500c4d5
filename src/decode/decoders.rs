//! JSON decoder implementation

use crate::error::{Error, Result};
use serde_json::Value;
use tracing::warn;

/// JSON decoder with optional record path extraction
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    /// JSONPath to extract records
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a new JSON decoder without a record path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder with a record path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Parse a response body into a JSON value.
    ///
    /// The raw body is logged on failure so a malformed vendor response can
    /// be diagnosed after the run aborts.
    pub fn parse(&self, body: &str) -> Result<Value> {
        serde_json::from_str(body).map_err(|e| {
            warn!("Response body is not valid JSON: {body}");
            Error::decode(format!("Failed to parse JSON: {e}"))
        })
    }

    /// Decode a response body into a list of records
    pub fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let value = self.parse(body)?;
        self.extract(&value)
    }

    /// Extract records from an already-parsed JSON value
    pub fn extract(&self, value: &Value) -> Result<Vec<Value>> {
        match &self.record_path {
            Some(path) => {
                // Wildcard selectors go through jsonpath-rust; plain
                // dot-notation paths use the simple walker.
                if path.contains('*') {
                    extract_with_jsonpath(value, path)
                } else {
                    match extract_simple_path(value, path) {
                        Some(Value::Array(arr)) => Ok(arr),
                        Some(v) => Ok(vec![v]),
                        None => Ok(vec![]),
                    }
                }
            }
            None => match value {
                Value::Array(arr) => Ok(arr.clone()),
                _ => Ok(vec![value.clone()]),
            },
        }
    }
}

/// Walk a simple dot-notation path (e.g. `data.items`)
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(part)?,
            _ => return None,
        }
    }

    Some(current.clone())
}

/// Extract records using jsonpath-rust for wildcard patterns
fn extract_with_jsonpath(value: &Value, path: &str) -> Result<Vec<Value>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path).map_err(|e| Error::JsonPath {
        message: format!("Invalid JSONPath: {e}"),
    })?;

    match jp.find(value) {
        Value::Array(arr) => Ok(arr),
        Value::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
