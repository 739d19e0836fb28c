//! Tests for decode module

use super::*;
use crate::error::Error;
use serde_json::json;

// ============================================================================
// JsonDecoder Tests
// ============================================================================

#[test]
fn test_json_decoder_no_path_array() {
    let decoder = JsonDecoder::new();
    let records = decoder.decode(r#"[{"iden": "a"}, {"iden": "b"}]"#).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["iden"], "a");
}

#[test]
fn test_json_decoder_no_path_object() {
    let decoder = JsonDecoder::new();
    let records = decoder.decode(r#"{"iden": "a"}"#).unwrap();

    assert_eq!(records, vec![json!({"iden": "a"})]);
}

#[test]
fn test_json_decoder_wildcard_path() {
    let decoder = JsonDecoder::with_path("$.pushes[*]");
    let body = r#"{"pushes": [{"iden": "p1"}, {"iden": "p2"}], "cursor": "x"}"#;
    let records = decoder.decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["iden"], "p2");
    assert_eq!(decoder.record_path(), Some("$.pushes[*]"));
}

#[test]
fn test_json_decoder_empty_page() {
    let decoder = JsonDecoder::with_path("$.chats[*]");
    let records = decoder.decode_value(&json!({"chats": []})).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_json_decoder_missing_envelope() {
    let decoder = JsonDecoder::with_path("$.devices[*]");
    let records = decoder.decode_value(&json!({"error": "nope"})).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_json_decoder_invalid_json() {
    let decoder = JsonDecoder::with_path("$.devices[*]");
    let err = decoder.decode("not json").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_json_decoder_simple_path() {
    let decoder = JsonDecoder::with_path("$.data.items");
    let records = decoder
        .decode_value(&json!({"data": {"items": [1, 2, 3]}}))
        .unwrap();
    assert_eq!(records, vec![json!(1), json!(2), json!(3)]);
}

// ============================================================================
// Path Helper Tests
// ============================================================================

#[test]
fn test_extract_string() {
    let body = json!({
        "cursor": "abc",
        "count": 3,
        "flag": true,
        "nested": {"value": "deep"},
        "list": [{"name": "first"}],
        "empty": null
    });

    assert_eq!(extract_string(&body, "$.cursor"), Some("abc".to_string()));
    assert_eq!(extract_string(&body, "count"), Some("3".to_string()));
    assert_eq!(extract_string(&body, "$.flag"), Some("true".to_string()));
    assert_eq!(
        extract_string(&body, "$.nested.value"),
        Some("deep".to_string())
    );
    assert_eq!(
        extract_string(&body, "$.list[0].name"),
        Some("first".to_string())
    );
    assert_eq!(extract_string(&body, "$.empty"), None);
    assert_eq!(extract_string(&body, "$.missing"), None);
    assert_eq!(extract_string(&body, "$.nested"), None);
}

#[test]
fn test_extract_records_null_field() {
    let records = extract_records(&json!({"subscriptions": null}), "$.subscriptions").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_extract_records_non_object_body() {
    let records = extract_records(&json!("just a string"), "$.chats[*]").unwrap();
    assert!(records.is_empty());
}
