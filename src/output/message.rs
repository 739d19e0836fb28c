//! Singer message types

use crate::schema::JsonSchema;
use crate::state::State;
use crate::types::JsonValue;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A message emitted on stdout
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// Describes the records that follow for a stream
    Schema {
        stream: String,
        schema: JsonValue,
        key_properties: Vec<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        bookmark_properties: Vec<String>,
    },
    /// One extracted record
    Record {
        stream: String,
        record: JsonValue,
        #[serde(skip_serializing_if = "Option::is_none")]
        time_extracted: Option<String>,
    },
    /// Bookmarks to resume from
    State { value: State },
}

impl Message {
    /// Create a schema message
    pub fn schema(
        stream: impl Into<String>,
        schema: &JsonSchema,
        key_properties: &[String],
        replication_key: Option<&str>,
    ) -> Self {
        Self::Schema {
            stream: stream.into(),
            schema: schema.to_json(),
            key_properties: key_properties.to_vec(),
            bookmark_properties: replication_key.map(str::to_string).into_iter().collect(),
        }
    }

    /// Create a record message stamped with the extraction time
    pub fn record(stream: impl Into<String>, record: JsonValue, extracted_at: DateTime<Utc>) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
            time_extracted: Some(extracted_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
        }
    }

    /// Create a state message
    pub fn state(value: State) -> Self {
        Self::State { value }
    }

    /// Stream the message belongs to; `None` for STATE
    pub fn stream(&self) -> Option<&str> {
        match self {
            Self::Schema { stream, .. } | Self::Record { stream, .. } => Some(stream),
            Self::State { .. } => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}
