//! Tests for the tap registry, settings and catalog

use super::*;
use crate::http::PageFetcher;
use crate::schema::{JsonSchema, Property};
use crate::streams::chats;
use crate::types::ReplicationMethod;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write as _;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_file(value: &JsonValue) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_config_from_value() {
    let config = TapConfig::from_value(&json!({
        "api_key": "o.secret",
        "start_date": 1_700_000_000
    }))
    .unwrap();

    assert_eq!(config.api_key, "o.secret");
    assert_eq!(config.start_date, Some(1_700_000_000.0));
    assert_eq!(config.api_url(), DEFAULT_API_URL);
    assert!(config.user_agent.is_none());
}

#[test]
fn test_config_missing_api_key() {
    let err = TapConfig::from_value(&json!({"start_date": 1})).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "api_key"));

    let err = TapConfig::from_value(&json!({"api_key": null})).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[test]
fn test_config_invalid_values() {
    let err = TapConfig::from_value(&json!({"api_key": ""})).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "api_key"));

    let err = TapConfig::from_value(&json!({"api_key": 42})).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));

    let err = TapConfig::from_value(&json!({"api_key": "k", "start_date": "yesterday"}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "start_date"));
}

#[test]
fn test_config_debug_redacts_key() {
    let config = TapConfig::new("o.very-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("very-secret"));
}

#[test]
fn test_config_later_files_override_earlier() {
    let base = config_file(&json!({"api_key": "first", "start_date": 10}));
    let overlay = config_file(&json!({"api_key": "second"}));
    let sources = [
        base.path().to_str().unwrap().to_string(),
        overlay.path().to_str().unwrap().to_string(),
    ];

    let config = TapConfig::load_with_env(&sources, no_env()).unwrap();

    assert_eq!(config.api_key, "second");
    assert_eq!(config.start_date, Some(10.0));
}

#[test]
fn test_config_from_environment() {
    let vars = vec![
        ("TAP_PUSHBULLET_API_KEY".to_string(), "from-env".to_string()),
        ("TAP_PUSHBULLET_START_DATE".to_string(), "1441054560.5".to_string()),
        ("HOME".to_string(), "/root".to_string()),
    ];

    let config = TapConfig::load_with_env(&[ENV_SOURCE], vars).unwrap();

    assert_eq!(config.api_key, "from-env");
    assert_eq!(config.start_date, Some(1_441_054_560.5));
}

#[test]
fn test_config_missing_file() {
    let err = TapConfig::load_with_env(&["/nonexistent/config.json"], no_env()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_config_file_must_be_object() {
    let file = config_file(&json!(["api_key"]));
    let sources = [file.path().to_str().unwrap().to_string()];
    let err = TapConfig::load_with_env(&sources, no_env()).unwrap_err();
    assert!(err.to_string().contains("JSON object"));
}

#[test]
fn test_config_jsonschema() {
    let schema = Tap::config_jsonschema();

    assert_eq!(schema["required"], json!(["api_key"]));
    assert_eq!(schema["properties"]["api_key"]["type"], json!("string"));
    assert_eq!(
        schema["properties"]["start_date"]["type"],
        json!(["number", "null"])
    );
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_tap_streams_in_order() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let names: Vec<&str> = tap.streams().iter().map(Stream::name).collect();

    assert_eq!(names, vec!["chats", "devices", "pushes", "subscriptions"]);
    assert!(tap.stream("pushes").is_some());
    assert!(tap.stream("contacts").is_none());
}

#[test]
fn test_streams_share_config() {
    let tap = Tap::new(TapConfig::new("shared").with_start_date(5.0)).unwrap();
    for stream in tap.streams() {
        assert_eq!(stream.config().api_key, "shared");
        assert_eq!(stream.config().start_date, Some(5.0));
    }
}

#[test]
fn test_duplicate_stream_rejected() {
    let err = Tap::with_definitions(
        TapConfig::new("k"),
        vec![chats::definition(), chats::definition()],
    )
    .unwrap_err();

    assert!(matches!(err, Error::DuplicateStream { ref stream } if stream == "chats"));
}

#[test]
fn test_blank_api_key_rejected() {
    let err = Tap::new(TapConfig::new("  ")).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[test]
fn test_invalid_definition_rejected() {
    let definition = StreamDefinition::new(
        "empty",
        "/v2/empty",
        JsonSchema::from_properties(Vec::<Property>::new()),
    );
    let err = Tap::with_definitions(TapConfig::new("k"), vec![definition]).unwrap_err();

    assert!(matches!(err, Error::InvalidStream { .. }));
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_entries() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let catalog = tap.catalog();

    assert_eq!(catalog.streams.len(), 4);
    let entry = catalog.entry("devices").unwrap();
    assert_eq!(entry.key_properties, vec!["iden".to_string()]);
    assert_eq!(entry.replication_key.as_deref(), Some("modified"));
    assert_eq!(entry.replication_method, Some(ReplicationMethod::Incremental));
    assert!(entry.is_selected());

    let root = &entry.metadata[0];
    assert!(root.breadcrumb.is_empty());
    assert_eq!(root.metadata["valid-replication-keys"], json!(["modified"]));
    assert_eq!(root.metadata["forced-replication-method"], json!("INCREMENTAL"));

    let iden = entry
        .metadata
        .iter()
        .find(|m| m.breadcrumb == ["properties", "iden"])
        .unwrap();
    assert_eq!(iden.metadata["inclusion"], json!("automatic"));
    let nickname = entry
        .metadata
        .iter()
        .find(|m| m.breadcrumb == ["properties", "nickname"])
        .unwrap();
    assert_eq!(nickname.metadata["inclusion"], json!("available"));
}

#[test]
fn test_catalog_json_shape() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let value = tap.catalog().to_json();

    assert_eq!(value["streams"][0]["tap_stream_id"], json!("chats"));
    assert_eq!(value["streams"][0]["schema"]["type"], json!("object"));
    assert_eq!(value["streams"][2]["replication_method"], json!("INCREMENTAL"));
}

#[test]
fn test_select_respects_metadata() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let mut value = tap.catalog().to_json();
    value["streams"][1]["metadata"][0]["metadata"]["selected"] = json!(false);
    value["streams"]
        .as_array_mut()
        .unwrap()
        .retain(|s| s["tap_stream_id"] != "subscriptions");

    let catalog = Catalog::from_value(value).unwrap();
    let names: Vec<&str> = tap.select(&catalog).unwrap().into_iter().map(Stream::name).collect();

    assert_eq!(names, vec!["chats", "pushes"]);
}

#[test]
fn test_select_legacy_schema_flag() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let catalog = Catalog::from_value(json!({
        "streams": [
            {"tap_stream_id": "pushes", "schema": {"selected": false}},
            {"tap_stream_id": "chats", "schema": {}}
        ]
    }))
    .unwrap();

    let names: Vec<&str> = tap.select(&catalog).unwrap().into_iter().map(Stream::name).collect();
    assert_eq!(names, vec!["chats"]);
}

#[test]
fn test_select_unknown_stream() {
    let tap = Tap::new(TapConfig::new("k")).unwrap();
    let catalog = Catalog::from_value(json!({
        "streams": [{"tap_stream_id": "contacts"}]
    }))
    .unwrap();

    let err = tap.select(&catalog).unwrap_err();
    assert!(matches!(err, Error::StreamNotFound { ref stream } if stream == "contacts"));
}

#[test]
fn test_invalid_catalog() {
    let err = Catalog::from_value(json!({"streams": "all"})).unwrap_err();
    assert!(err.to_string().contains("Invalid catalog"));
}

// ============================================================================
// About
// ============================================================================

#[test]
fn test_about_json() {
    let about = Tap::about();

    assert_eq!(about["name"], json!("tap-pushbullet"));
    assert_eq!(
        about["capabilities"],
        json!(["catalog", "state", "discover", "about"])
    );
    assert_eq!(about["settings"]["required"], json!(["api_key"]));
}

#[test]
fn test_about_markdown() {
    let markdown = Tap::about_markdown();

    assert!(markdown.starts_with("# `tap-pushbullet`"));
    assert!(markdown.contains("* `discover`"));
    assert!(markdown.contains("| api_key | True | API Key for Pushbullet |"));
    assert!(markdown.contains("| start_date | False |"));
}

#[test]
fn test_about_markdown_layout() {
    let markdown = Tap::about_markdown();
    let lines: Vec<&str> = markdown.lines().collect();

    assert_eq!(&lines[..3], &["# `tap-pushbullet`", "", "Singer tap for Pushbullet"]);
    let capabilities = lines.iter().position(|l| *l == "## Capabilities").unwrap();
    assert_eq!(
        &lines[capabilities + 2..capabilities + 6],
        &["* `catalog`", "* `state`", "* `discover`", "* `about`"]
    );
    let rows = lines
        .iter()
        .filter(|l| l.starts_with("| ") && !l.starts_with("| Setting"))
        .count();
    assert_eq!(rows, 4);
    assert!(markdown.ends_with("`tap-pushbullet --about`\n"));
}

// ============================================================================
// HTTP client
// ============================================================================

#[tokio::test]
async fn test_http_client_sends_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/devices"))
        .and(header("Access-Token", "o.token"))
        .and(header("User-Agent", "custom-agent/1.0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = TapConfig::new("o.token").with_api_url(server.uri());
    config.user_agent = Some("custom-agent/1.0".to_string());
    let tap = Tap::new(config).unwrap();
    let client = tap.http_client().unwrap();

    let mut params = crate::types::StringMap::new();
    params.insert("limit".to_string(), "100".to_string());
    let body = client.fetch_page("/v2/devices", &params).await.unwrap();

    assert_eq!(body, json!({"devices": []}));
}
