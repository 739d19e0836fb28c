//! Pushbullet stream definitions
//!
//! Each stream is a declarative [`StreamDefinition`]: endpoint path, record
//! JSONPath, keys, schema and fixed query parameters. Schemas are composed
//! from the shared field groups in [`fields`].

pub mod chats;
pub mod devices;
pub mod fields;
pub mod pushes;
pub mod subscriptions;

use crate::error::{Error, Result};
use crate::pagination::CursorPaginator;
use crate::schema::JsonSchema;
use crate::types::{ReplicationMethod, StringMap};

/// Records requested per page
pub const PAGE_SIZE: u32 = 100;

/// Primary key shared by every Pushbullet object
pub const PRIMARY_KEY: &str = "iden";

/// Replication key shared by every Pushbullet object
pub const REPLICATION_KEY: &str = "modified";

/// Static description of one extractable stream
#[derive(Debug, Clone)]
pub struct StreamDefinition {
    /// Unique stream name
    pub name: String,
    /// Endpoint path relative to the API base URL
    pub path: String,
    /// JSONPath to the record array within a page
    pub records_path: String,
    /// Primary key fields
    pub primary_keys: Vec<String>,
    /// Field used for incremental bookmarks
    pub replication_key: Option<String>,
    /// Record schema
    pub schema: JsonSchema,
    /// Query parameters sent with every request
    pub extra_params: Vec<(String, String)>,
}

impl StreamDefinition {
    /// Create a Pushbullet stream whose records live under `$.<name>[*]`
    pub fn new(name: impl Into<String>, path: impl Into<String>, schema: JsonSchema) -> Self {
        let name = name.into();
        Self {
            records_path: format!("$.{name}[*]"),
            name,
            path: path.into(),
            primary_keys: vec![PRIMARY_KEY.to_string()],
            replication_key: Some(REPLICATION_KEY.to_string()),
            schema,
            extra_params: Vec::new(),
        }
    }

    /// Add a fixed query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    /// Replace the replication key
    #[must_use]
    pub fn with_replication_key(mut self, key: Option<&str>) -> Self {
        self.replication_key = key.map(str::to_string);
        self
    }

    pub fn replication_method(&self) -> ReplicationMethod {
        if self.replication_key.is_some() {
            ReplicationMethod::Incremental
        } else {
            ReplicationMethod::FullTable
        }
    }

    /// Check that the keys name top-level schema fields
    pub fn validate(&self) -> Result<()> {
        if let Some(key) = &self.replication_key {
            if !self.schema.has_property(key) {
                return Err(Error::invalid_stream(
                    &self.name,
                    format!("replication key '{key}' is not a schema field"),
                ));
            }
        }
        for key in &self.primary_keys {
            if !self.schema.has_property(key) {
                return Err(Error::invalid_stream(
                    &self.name,
                    format!("primary key '{key}' is not a schema field"),
                ));
            }
        }
        Ok(())
    }

    /// Query parameters for one page request
    ///
    /// `cursor` and `modified_after` are only present when known; `limit`
    /// and the stream's fixed parameters are always sent.
    pub fn url_params(&self, cursor: Option<&str>, starting_value: Option<f64>) -> StringMap {
        let mut params = StringMap::new();
        if let Some(cursor) = cursor {
            params.insert("cursor".to_string(), cursor.to_string());
        }
        params.insert("limit".to_string(), PAGE_SIZE.to_string());
        if let Some(value) = starting_value {
            params.insert("modified_after".to_string(), value.to_string());
        }
        for (key, value) in &self.extra_params {
            params.insert(key.clone(), value.clone());
        }
        params
    }

    /// Paginator reading `$.cursor` and this stream's records path
    pub fn paginator(&self) -> CursorPaginator {
        CursorPaginator::pushbullet(&self.records_path)
    }
}

/// All Pushbullet streams, in sync order
pub fn definitions() -> Vec<StreamDefinition> {
    vec![
        chats::definition(),
        devices::definition(),
        pushes::definition(),
        subscriptions::definition(),
    ]
}

#[cfg(test)]
mod tests;
