// src/config.rs
//! Client configuration — validated and ready to drive the transport and
//! the rate limiter.

use crate::constants::{
    API_BASE_URL, CONNECT_TIMEOUT, NOTION_VERSION, RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW,
    REQUEST_TIMEOUT,
};
use crate::error::{Error, ValidationError};
use crate::types::ApiKey;
use std::time::Duration;
use url::Url;

/// Resolved client configuration.
///
/// Constructed with [`ClientConfig::new`] and adjusted through the
/// chainable setters; every `Client` owns one. Two clients built from the
/// same config still get independent rate-limiter state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Requests admitted per rate-limit window.
    pub max_requests_per_window: u32,
    /// Duration of one rate-limit window.
    pub window_duration: Duration,
    /// Optional bound on how long a caller may wait for window capacity.
    /// `None` (the default) waits indefinitely.
    pub rate_limit_wait_timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the documented Notion defaults.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: API_BASE_URL.to_string(),
            notion_version: NOTION_VERSION.to_string(),
            max_requests_per_window: RATE_LIMIT_MAX_REQUESTS,
            window_duration: RATE_LIMIT_WINDOW,
            rate_limit_wait_timeout: None,
            connect_timeout: CONNECT_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Resolves a configuration from the `NOTION_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(ApiKey::from_env()?))
    }

    /// Overrides the API base URL (e.g. for a proxy or a test server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Result<Self, Error> {
        let raw = base_url.into();
        let parsed = Url::parse(&raw).map_err(|e| ValidationError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidUrl {
                url: raw,
                reason: "scheme must be http or https".to_string(),
            }
            .into());
        }
        self.base_url = raw.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Overrides the `Notion-Version` header value.
    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Overrides the rate-limit window shape.
    pub fn rate_limit(mut self, max_requests: u32, window: Duration) -> Self {
        self.max_requests_per_window = max_requests.max(1);
        self.window_duration = window;
        self
    }

    /// Bounds how long a caller may wait for rate-limit capacity before
    /// failing with `RateLimitWaitExhausted`.
    pub fn rate_limit_wait_timeout(mut self, timeout: Duration) -> Self {
        self.rate_limit_wait_timeout = Some(timeout);
        self
    }

    /// Overrides the transport timeouts.
    pub fn timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("secret_0123456789abcdef0123").unwrap()
    }

    #[test]
    fn defaults_match_documented_limits() {
        let config = ClientConfig::new(test_key());
        assert_eq!(config.max_requests_per_window, 3);
        assert_eq!(config.window_duration, Duration::from_millis(1000));
        assert!(config.rate_limit_wait_timeout.is_none());
        assert_eq!(config.base_url, "https://api.notion.com/v1");
    }

    #[test]
    fn base_url_is_validated_and_trimmed() {
        let config = ClientConfig::new(test_key())
            .base_url("https://proxy.example.com/notion/")
            .unwrap();
        assert_eq!(config.base_url, "https://proxy.example.com/notion");

        assert!(ClientConfig::new(test_key()).base_url("ftp://nope").is_err());
        assert!(ClientConfig::new(test_key()).base_url("not a url").is_err());
    }

    #[test]
    fn rate_limit_floor_is_one_request() {
        let config = ClientConfig::new(test_key()).rate_limit(0, Duration::from_secs(1));
        assert_eq!(config.max_requests_per_window, 1);
    }
}
