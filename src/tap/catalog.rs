//! Singer catalog
//!
//! Produced by `--discover` and read back through `--catalog` to choose
//! which streams to sync.

use crate::streams::StreamDefinition;
use crate::types::{JsonObject, JsonValue, ReplicationMethod};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A Singer catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub streams: Vec<CatalogEntry>,
}

/// One stream in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub tap_stream_id: String,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub schema: JsonValue,
    #[serde(default)]
    pub key_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_method: Option<ReplicationMethod>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

/// Breadcrumb-addressed metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(default)]
    pub breadcrumb: Vec<String>,
    #[serde(default)]
    pub metadata: JsonObject,
}

impl Catalog {
    /// Build the discovery catalog for `definitions`
    pub fn discover<'a>(definitions: impl IntoIterator<Item = &'a StreamDefinition>) -> Self {
        Self {
            streams: definitions.into_iter().map(CatalogEntry::discover).collect(),
        }
    }

    /// Parse a catalog document
    pub fn from_value(value: JsonValue) -> crate::error::Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| crate::error::Error::config(format!("Invalid catalog: {e}")))
    }

    /// Look up an entry by `tap_stream_id`
    pub fn entry(&self, stream: &str) -> Option<&CatalogEntry> {
        self.streams.iter().find(|e| e.tap_stream_id == stream)
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl CatalogEntry {
    /// Entry for a stream, selected by default
    pub fn discover(definition: &StreamDefinition) -> Self {
        let mut metadata = vec![MetadataEntry {
            breadcrumb: Vec::new(),
            metadata: root_metadata(definition),
        }];

        for name in definition.schema.properties.names() {
            let automatic = definition.primary_keys.iter().any(|k| k == name)
                || definition.replication_key.as_deref() == Some(name);
            let mut entry = JsonObject::new();
            entry.insert(
                "inclusion".to_string(),
                json!(if automatic { "automatic" } else { "available" }),
            );
            metadata.push(MetadataEntry {
                breadcrumb: vec!["properties".to_string(), name.to_string()],
                metadata: entry,
            });
        }

        Self {
            tap_stream_id: definition.name.clone(),
            stream: Some(definition.name.clone()),
            schema: definition.schema.to_json(),
            key_properties: definition.primary_keys.clone(),
            replication_key: definition.replication_key.clone(),
            replication_method: Some(definition.replication_method()),
            metadata,
        }
    }

    /// Whether the stream should be synced
    ///
    /// Only an explicit `selected: false` in root metadata (or the legacy
    /// `schema.selected`) deselects a stream.
    pub fn is_selected(&self) -> bool {
        let root = self
            .metadata
            .iter()
            .find(|m| m.breadcrumb.is_empty())
            .and_then(|m| m.metadata.get("selected"))
            .and_then(JsonValue::as_bool);
        let legacy = self.schema.get("selected").and_then(JsonValue::as_bool);
        root.or(legacy).unwrap_or(true)
    }
}

fn root_metadata(definition: &StreamDefinition) -> JsonObject {
    let mut metadata = JsonObject::new();
    metadata.insert("inclusion".to_string(), json!("available"));
    metadata.insert("selected".to_string(), json!(true));
    metadata.insert(
        "table-key-properties".to_string(),
        json!(definition.primary_keys),
    );
    if let Some(key) = &definition.replication_key {
        metadata.insert("valid-replication-keys".to_string(), json!([key]));
    }
    metadata.insert(
        "forced-replication-method".to_string(),
        json!(definition.replication_method()),
    );
    metadata
}
