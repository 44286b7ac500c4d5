//! Tests for the decode module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_root_array_selector() {
    let decoder = JsonDecoder::with_path(RECORDS_JSONPATH);
    let body = json!([
        {"tilroyId": "1", "name": "Antwerp"},
        {"tilroyId": "2", "name": "Ghent"}
    ])
    .to_string();

    let records = decoder.decode(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["tilroyId"], "1");
    assert_eq!(records[1]["name"], "Ghent");
}

#[test]
fn test_empty_array_yields_no_records() {
    let decoder = JsonDecoder::with_path(RECORDS_JSONPATH);
    let records = decoder.decode("[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_simple_path_extraction() {
    let decoder = JsonDecoder::with_path("data.items");
    let body = json!({"data": {"items": [{"id": 1}, {"id": 2}]}}).to_string();

    let records = decoder.decode(&body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
}

#[test]
fn test_missing_path_yields_no_records() {
    let decoder = JsonDecoder::with_path("data.items");
    let records = decoder.decode(r#"{"other": true}"#).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_no_path_wraps_object() {
    let decoder = JsonDecoder::new();
    let records = decoder.decode(r#"{"id": 1}"#).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
}

#[test]
fn test_invalid_json_is_a_decode_error() {
    let decoder = JsonDecoder::with_path(RECORDS_JSONPATH);
    let err = decoder.decode("<html>Bad gateway</html>").unwrap_err();
    assert!(err.to_string().contains("Failed to decode"));
}
