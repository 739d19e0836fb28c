//! Tap settings
//!
//! Settings come from JSON files merged left to right, or from
//! `TAP_PUSHBULLET_*` environment variables when a source is the literal
//! `ENV`.

use crate::error::{Error, Result};
use crate::schema::{JsonSchema, Property, SchemaProperty};
use crate::types::{json_as_f64, JsonObject, JsonValue, OptionStringExt};
use std::path::Path;

/// Source name that selects environment variables instead of a file
pub const ENV_SOURCE: &str = "ENV";

/// Prefix of the environment variables read for the `ENV` source
pub const ENV_PREFIX: &str = "TAP_PUSHBULLET_";

/// Default Pushbullet API endpoint
pub const DEFAULT_API_URL: &str = "https://api.pushbullet.com";

/// Validated tap settings
#[derive(Clone, PartialEq)]
pub struct TapConfig {
    /// Pushbullet access token, sent as `Access-Token`
    pub api_key: String,
    /// Earliest `modified` timestamp to extract
    pub start_date: Option<f64>,
    /// Overrides the default `tap-pushbullet/<version>` agent
    pub user_agent: Option<String>,
    /// Overrides the API base URL
    pub api_url: Option<String>,
}

impl std::fmt::Debug for TapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapConfig")
            .field("api_key", &"[REDACTED]")
            .field("start_date", &self.start_date)
            .field("user_agent", &self.user_agent)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl TapConfig {
    /// Create settings with just an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            start_date: None,
            user_agent: None,
            api_url: None,
        }
    }

    #[must_use]
    pub fn with_start_date(mut self, start_date: f64) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// API base URL, falling back to the public endpoint
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Validate a merged settings object
    pub fn from_value(value: &JsonValue) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::config("settings must be a JSON object"))?;

        let api_key = match object.get("api_key") {
            None | Some(JsonValue::Null) => return Err(Error::missing_field("api_key")),
            Some(JsonValue::String(s)) if s.trim().is_empty() => {
                return Err(Error::invalid_value("api_key", "must not be empty"))
            }
            Some(JsonValue::String(s)) => s.clone(),
            Some(_) => return Err(Error::invalid_value("api_key", "must be a string")),
        };

        let start_date = match object.get("start_date") {
            None | Some(JsonValue::Null) => None,
            Some(v) => Some(
                json_as_f64(v)
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| Error::invalid_value("start_date", "must be a Unix timestamp"))?,
            ),
        };

        Ok(Self {
            api_key,
            start_date,
            user_agent: optional_string(object, "user_agent")?,
            api_url: optional_string(object, "api_url")?,
        })
    }

    /// Load and validate settings from `--config` sources
    pub fn load<S: AsRef<str>>(sources: &[S]) -> Result<Self> {
        Self::load_with_env(sources, std::env::vars())
    }

    /// Like [`TapConfig::load`], reading `ENV` sources from `vars`
    pub fn load_with_env<S, I>(sources: &[S], vars: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (String, String)>,
    {
        let env = env_settings(vars);
        let mut merged = JsonObject::new();

        for source in sources {
            let source = source.as_ref();
            let layer = if source == ENV_SOURCE {
                env.clone()
            } else {
                read_file(Path::new(source))?
            };
            merged.extend(layer);
        }

        Self::from_value(&JsonValue::Object(merged))
    }

    /// JSON Schema describing the accepted settings
    pub fn jsonschema() -> JsonSchema {
        JsonSchema::from_properties([
            Property::new(
                "api_key",
                SchemaProperty::string().with_description("API Key for Pushbullet"),
            )
            .required(),
            Property::new(
                "start_date",
                SchemaProperty::number()
                    .with_description("Earliest Unix timestamp to get data from"),
            ),
            Property::new(
                "user_agent",
                SchemaProperty::string()
                    .with_description("User-Agent header sent with every request"),
            ),
            Property::new(
                "api_url",
                SchemaProperty::string()
                    .with_description("Base URL of the Pushbullet API")
                    .with_example(DEFAULT_API_URL),
            ),
        ])
    }
}

fn optional_string(object: &JsonObject, field: &str) -> Result<Option<String>> {
    match object.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(s.clone().none_if_empty()),
        Some(_) => Err(Error::invalid_value(field, "must be a string")),
    }
}

fn read_file(path: &Path) -> Result<JsonObject> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    let value: JsonValue = serde_json::from_str(&content).map_err(|e| {
        Error::config(format!("Invalid config JSON in {}: {e}", path.display()))
    })?;
    match value {
        JsonValue::Object(map) => Ok(map),
        _ => Err(Error::config(format!(
            "Config file {} must contain a JSON object",
            path.display()
        ))),
    }
}

/// Map `TAP_PUSHBULLET_<FIELD>` variables to lowercase setting names
fn env_settings<I>(vars: I) -> JsonObject
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let field = key.strip_prefix(ENV_PREFIX)?.to_ascii_lowercase();
            Some((field, JsonValue::String(value)))
        })
        .collect()
}
