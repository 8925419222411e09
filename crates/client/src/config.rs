//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `COUNTERLINE_API_URL` - Base URL of the commerce backend
//!   (default: `http://localhost:8000`)

use thiserror::Error;
use url::Url;

/// Default backend address for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_ENV: &str = "COUNTERLINE_API_URL";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),
}

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration for a given backend base URL.
    ///
    /// The URL is validated and any trailing slashes are stripped so that
    /// endpoint paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the value does not parse as
    /// an absolute `http` or `https` URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim_end_matches('/').to_string();

        let parsed = Url::parse(&trimmed)
            .map_err(|e| ConfigError::InvalidBaseUrl(raw.clone(), e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(
                raw,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        Ok(Self { base_url: trimmed })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `COUNTERLINE_API_URL` is set to a value that
    /// is not a valid `http`/`https` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default(API_URL_ENV, DEFAULT_API_URL);
        Self::new(base_url).map_err(|e| match e {
            ConfigError::InvalidBaseUrl(value, reason) => ConfigError::InvalidEnvVar(
                API_URL_ENV.to_string(),
                format!("'{value}': {reason}"),
            ),
            other => other,
        })
    }

    /// Backend base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    /// The local-development default, `http://localhost:8000`.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_clean_url_is_kept() {
        let config = ClientConfig::new("https://api.example.com").unwrap();
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_rejects_garbage() {
        let result = ClientConfig::new("not a url");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_, _))));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = ClientConfig::new("ftp://example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_, _))));
    }

    #[test]
    fn test_rejects_schemeless_host_port() {
        // Url::parse would treat "localhost" as the scheme here
        let result = ClientConfig::new("localhost:8000");
        assert!(result.is_err());
    }
}
