//! Tap registry
//!
//! Binds validated settings to the ordered set of Pushbullet streams and
//! answers discovery and `--about` requests.

mod catalog;
mod config;

pub use catalog::{Catalog, CatalogEntry, MetadataEntry};
pub use config::{TapConfig, DEFAULT_API_URL, ENV_PREFIX, ENV_SOURCE};

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RateLimitResetBackoff};
use crate::streams::{self, StreamDefinition};
use crate::types::JsonValue;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Header carrying the Pushbullet access token
pub const AUTH_HEADER: &str = "Access-Token";

/// Capabilities advertised by `--about`
pub const CAPABILITIES: [&str; 4] = ["catalog", "state", "discover", "about"];

/// A stream bound to the tap's settings
#[derive(Debug, Clone)]
pub struct Stream {
    definition: StreamDefinition,
    config: Arc<TapConfig>,
}

impl Stream {
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &StreamDefinition {
        &self.definition
    }

    /// Settings shared with every other stream of the tap
    pub fn config(&self) -> &TapConfig {
        &self.config
    }
}

/// The Pushbullet tap
#[derive(Debug, Clone)]
pub struct Tap {
    config: Arc<TapConfig>,
    streams: Vec<Stream>,
}

impl Tap {
    /// Create the tap with every Pushbullet stream
    pub fn new(config: TapConfig) -> Result<Self> {
        Self::with_definitions(config, streams::definitions())
    }

    /// Create the tap with a custom stream set
    ///
    /// Rejects a blank API key. Duplicate stream names and keys that are not
    /// schema fields are errors as well.
    pub fn with_definitions(config: TapConfig, definitions: Vec<StreamDefinition>) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::invalid_value("api_key", "must not be empty"));
        }
        let config = Arc::new(config);
        let mut seen = HashSet::new();
        let mut streams = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if !seen.insert(definition.name.clone()) {
                return Err(Error::DuplicateStream {
                    stream: definition.name,
                });
            }
            definition.validate()?;
            streams.push(Stream {
                definition,
                config: Arc::clone(&config),
            });
        }

        debug!(streams = streams.len(), "Tap initialized");
        Ok(Self { config, streams })
    }

    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Streams in sync order
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    /// Look up a stream by name
    pub fn stream(&self, name: &str) -> Option<&Stream> {
        self.streams.iter().find(|s| s.name() == name)
    }

    /// JSON Schema of the accepted settings
    pub fn config_jsonschema() -> JsonValue {
        TapConfig::jsonschema().to_json()
    }

    /// Discovery catalog for every stream
    pub fn catalog(&self) -> Catalog {
        Catalog::discover(self.streams.iter().map(Stream::definition))
    }

    /// Streams selected by `catalog`, in the tap's order
    ///
    /// Streams absent from the catalog are skipped. Catalog entries naming
    /// unknown streams are an error.
    pub fn select(&self, catalog: &Catalog) -> Result<Vec<&Stream>> {
        for entry in &catalog.streams {
            if self.stream(&entry.tap_stream_id).is_none() {
                return Err(Error::StreamNotFound {
                    stream: entry.tap_stream_id.clone(),
                });
            }
        }

        let selected = self
            .streams
            .iter()
            .filter(|stream| match catalog.entry(stream.name()) {
                Some(entry) if entry.is_selected() => true,
                Some(_) => {
                    debug!(stream = stream.name(), "Stream deselected in catalog");
                    false
                }
                None => false,
            })
            .collect::<Vec<_>>();

        if selected.is_empty() {
            warn!("No streams selected in catalog");
        }
        Ok(selected)
    }

    /// HTTP client configured for the Pushbullet API
    pub fn http_client(&self) -> Result<HttpClient> {
        let mut builder = HttpClientConfig::builder()
            .base_url(self.config.api_url())
            .retry_scheduler(RateLimitResetBackoff);
        if let Some(agent) = &self.config.user_agent {
            builder = builder.user_agent(agent);
        }

        HttpClient::with_auth(
            builder.build(),
            AuthConfig::api_key_header(AUTH_HEADER, &self.config.api_key),
        )
    }

    /// `--about` document
    pub fn about() -> JsonValue {
        json!({
            "name": crate::NAME,
            "description": "Singer tap for Pushbullet",
            "version": crate::VERSION,
            "capabilities": CAPABILITIES,
            "settings": Self::config_jsonschema(),
        })
    }

    /// `--about` rendered as Markdown
    pub fn about_markdown() -> String {
        let schema = TapConfig::jsonschema();
        let mut lines = vec![
            format!("# `{}`", crate::NAME),
            String::new(),
            "Singer tap for Pushbullet".to_string(),
            String::new(),
            format!("Version: {}", crate::VERSION),
            String::new(),
            "## Capabilities".to_string(),
            String::new(),
        ];
        lines.extend(CAPABILITIES.iter().map(|c| format!("* `{c}`")));
        lines.extend([
            String::new(),
            "## Settings".to_string(),
            String::new(),
            "| Setting | Required | Description |".to_string(),
            "|:--------|:--------:|:------------|".to_string(),
        ]);
        lines.extend(schema.properties.iter().map(|property| {
            format!(
                "| {} | {} | {} |",
                property.name,
                if property.required { "True" } else { "False" },
                property.schema.description.as_deref().unwrap_or("")
            )
        }));
        lines.push(String::new());
        lines.push(format!(
            "A full list of supported settings and capabilities is available by running: \
             `{} --about`",
            crate::NAME
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests;
