//! Tests for stream definitions

use super::*;
use crate::schema::JsonType;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_definitions_order() {
    let names: Vec<String> = definitions().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["chats", "devices", "pushes", "subscriptions"]);
}

#[test]
fn test_definitions_are_valid() {
    for definition in definitions() {
        definition.validate().unwrap();
        assert_eq!(definition.primary_keys, vec!["iden".to_string()]);
        assert_eq!(definition.replication_key.as_deref(), Some("modified"));
        assert_eq!(definition.records_path, format!("$.{}[*]", definition.name));
        assert_eq!(definition.path, format!("/v2/{}", definition.name));
        assert_eq!(definition.replication_method(), ReplicationMethod::Incremental);
    }
}

#[test]
fn test_common_fields_lead_every_schema() {
    for definition in definitions() {
        let names = definition.schema.properties.names();
        assert_eq!(&names[..4], &["iden", "active", "created", "modified"]);
    }
}

#[test]
fn test_url_params_first_page() {
    let params = chats::definition().url_params(None, None);

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("limit"), Some(&"100".to_string()));
}

#[test]
fn test_url_params_with_cursor_and_start() {
    let params = devices::definition().url_params(Some("X"), Some(1_441_054_560.741_007));

    assert_eq!(params.get("cursor"), Some(&"X".to_string()));
    assert_eq!(params.get("limit"), Some(&"100".to_string()));
    assert_eq!(
        params.get("modified_after"),
        Some(&"1441054560.741007".to_string())
    );
    assert!(params.get("active").is_none());
}

#[test]
fn test_pushes_always_request_active() {
    let pushes = pushes::definition();

    for (cursor, start) in [(None, None), (Some("abc"), Some(1_700_000_000.0))] {
        let params = pushes.url_params(cursor, start);
        assert_eq!(params.get("active"), Some(&"true".to_string()));
    }
}

#[test]
fn test_whole_number_start_has_no_fraction() {
    let params = chats::definition().url_params(None, Some(1_700_000_000.0));
    assert_eq!(
        params.get("modified_after"),
        Some(&"1700000000".to_string())
    );
}

#[test]
fn test_chats_with_object() {
    let schema = chats::definition().schema.to_json();
    let with = &schema["properties"]["with"];

    assert_eq!(with["type"], json!(["object", "null"]));
    assert_eq!(
        with["properties"]["type"]["enum"],
        json!(["email", "user"])
    );
    assert_eq!(
        with["properties"]["email_normalized"]["description"],
        "Canonical email address of the person"
    );
}

#[test]
fn test_pushes_schema_fields() {
    let definition = pushes::definition();
    let schema = &definition.schema;

    assert_eq!(schema.properties.len(), 29);
    assert_eq!(
        schema.to_json()["properties"]["direction"]["enum"],
        json!(["self", "outgoing", "incoming"])
    );

    let guids = schema.get_property("awake_app_guids").unwrap();
    assert_eq!(guids.json_type.primary_type(), Some(JsonType::Array));
    assert_eq!(
        guids.items.as_ref().unwrap().json_type.primary_type(),
        Some(JsonType::String)
    );

    let width = schema.get_property("image_width").unwrap();
    assert_eq!(width.json_type.primary_type(), Some(JsonType::Integer));
}

#[test]
fn test_devices_schema_fields() {
    let definition = devices::definition();
    assert_eq!(definition.schema.properties.len(), 14);
    assert_eq!(
        definition.schema.to_json()["properties"]["app_version"]["examples"],
        json!([8623])
    );
}

#[test]
fn test_subscriptions_channel_object() {
    let schema = subscriptions::definition().schema;
    let channel = schema.get_property("channel").unwrap();
    let nested = channel.properties.as_ref().unwrap();

    assert_eq!(
        nested.names(),
        vec!["iden", "tag", "name", "description", "image_url", "website_url"]
    );
}

#[test]
fn test_validate_rejects_unknown_replication_key() {
    let definition = chats::definition().with_replication_key(Some("updated_at"));
    let err = definition.validate().unwrap_err();
    assert!(err.to_string().contains("updated_at"));
}

#[test]
fn test_full_table_without_replication_key() {
    let definition = chats::definition().with_replication_key(None);
    definition.validate().unwrap();
    assert_eq!(definition.replication_method(), ReplicationMethod::FullTable);
}
