//! Startup configuration.
//!
//! The API key is read from the environment exactly once, at assembly time,
//! and materialized into an explicit [`ApiConfig`] handed to the client
//! constructor. A missing key is a startup failure: no request could succeed
//! without it, so the process refuses to come up at all.

use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Teachable API key.
pub const API_KEY_ENV: &str = "TEACHABLE_API_KEY";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://developers.teachable.com/v1";

const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Errors that can occur while assembling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Teachable API key is not configured (set {API_KEY_ENV})")]
    MissingApiKey,

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Connection settings for the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    /// Build an [`ApiConfig`] from an explicit key and optional base override.
    ///
    /// Fails closed when the key is empty or absent.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Result<Self, ConfigError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        // Trailing slash would double up when joining endpoint paths.
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { api_key, base_url })
    }

    /// Build from the process environment plus an optional CLI override.
    pub fn from_env(base_url_override: Option<String>) -> Result<Self, ConfigError> {
        Self::new(std::env::var(API_KEY_ENV).ok(), base_url_override)
    }
}

/// Application-level settings that do not concern the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tick_rate: Duration,
}

impl AppConfig {
    pub fn new(api: ApiConfig, tick_rate_ms: Option<u64>) -> Self {
        Self {
            api,
            tick_rate: Duration::from_millis(tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_closed() {
        let err = ApiConfig::new(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn empty_key_fails_closed() {
        let err = ApiConfig::new(Some("   ".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn present_key_uses_default_base() {
        let config = ApiConfig::new(Some("test-api-key".to_string()), None).unwrap();
        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn base_override_trims_trailing_slash() {
        let config = ApiConfig::new(
            Some("k".to_string()),
            Some("http://127.0.0.1:9000/".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn non_http_base_is_rejected() {
        let err = ApiConfig::new(Some("k".to_string()), Some("ftp://nope".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
