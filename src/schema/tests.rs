//! Schema serialization tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_nullable_scalar_property() {
    let prop = SchemaProperty::string()
        .with_description("Name of the person")
        .with_example("John Carmack");

    assert!(prop.is_nullable());
    assert_eq!(
        serde_json::to_value(&prop).unwrap(),
        json!({
            "type": ["string", "null"],
            "description": "Name of the person",
            "examples": ["John Carmack"]
        })
    );
}

#[test]
fn test_allowed_values() {
    let prop = SchemaProperty::string().with_allowed_values(&["note", "file", "link"]);
    let value = serde_json::to_value(&prop).unwrap();
    assert_eq!(value["enum"], json!(["note", "file", "link"]));
}

#[test]
fn test_array_property() {
    let prop = SchemaProperty::array(SchemaProperty::string())
        .with_example(json!(["web-2d8cdf2a2b9b", "web-cdb2313c74e"]));

    assert_eq!(
        serde_json::to_value(&prop).unwrap(),
        json!({
            "type": ["array", "null"],
            "items": {"type": ["string", "null"]},
            "examples": [["web-2d8cdf2a2b9b", "web-cdb2313c74e"]]
        })
    );
}

#[test]
fn test_object_property_keeps_order() {
    let prop = SchemaProperty::object([
        Property::new("zeta", SchemaProperty::string()),
        Property::new("alpha", SchemaProperty::integer()),
    ]);

    let text = serde_json::to_string(&prop).unwrap();
    let zeta = text.find("zeta").unwrap();
    let alpha = text.find("alpha").unwrap();
    assert!(zeta < alpha);
}

#[test]
fn test_required_property_is_not_nullable() {
    let prop = Property::new("api_key", SchemaProperty::string()).required();
    assert!(prop.required);
    assert_eq!(prop.schema.json_type, JsonTypeOrArray::single(JsonType::String));
}

#[test]
fn test_schema_from_properties() {
    let schema = JsonSchema::from_properties([
        Property::new("api_key", SchemaProperty::string()).required(),
        Property::new("start_date", SchemaProperty::number()),
    ]);

    assert!(schema.has_property("api_key"));
    assert!(schema.is_required("api_key"));
    assert!(!schema.is_required("start_date"));
    assert!(!schema.has_property("missing"));
    assert_eq!(schema.properties.names(), vec!["api_key", "start_date"]);

    assert_eq!(
        schema.to_json(),
        json!({
            "type": "object",
            "properties": {
                "api_key": {"type": "string"},
                "start_date": {"type": ["number", "null"]}
            },
            "required": ["api_key"]
        })
    );
}

#[test]
fn test_schema_without_required_omits_key() {
    let schema = JsonSchema::from_properties([Property::new("iden", SchemaProperty::string())]);
    assert!(schema.to_json().get("required").is_none());
}

#[test]
fn test_primary_type() {
    assert_eq!(
        JsonTypeOrArray::nullable(JsonType::Number).primary_type(),
        Some(JsonType::Number)
    );
    assert_eq!(
        JsonTypeOrArray::single(JsonType::Null).primary_type(),
        Some(JsonType::Null)
    );
    assert_eq!(JsonType::Boolean.to_string(), "boolean");
}
