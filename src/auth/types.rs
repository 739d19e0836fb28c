//! Auth configuration types

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API key sent in a request header
    ApiKey {
        /// Header name
        header: String,
        /// The API key value
        value: String,
    },
}

impl AuthConfig {
    /// API key sent in the `header` request header
    pub fn api_key_header(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ApiKey {
            header: header.into(),
            value: value.into(),
        }
    }
}

// Keeps access tokens out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::ApiKey { header, .. } => f
                .debug_struct("ApiKey")
                .field("header", header)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(matches!(config, AuthConfig::None));
    }

    #[test]
    fn test_auth_config_debug_redacts_value() {
        let config = AuthConfig::api_key_header("Access-Token", "o.secret");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("Access-Token"));
        assert!(!rendered.contains("o.secret"));
    }
}
