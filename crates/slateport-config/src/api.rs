//! Backend API configuration.
//!
//! # Configuration
//!
//! The API connection can be configured via environment variables:
//!
//! - `SLATEPORT_API_BASE_URL`: Base URL of the portal backend, including
//!   the `/api` prefix (default: `http://localhost:5000/api`)
//! - `SLATEPORT_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//!   (default: 30)

use std::time::Duration;

/// Backend API connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every request path is joined to.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Creates a new `ApiConfig` from environment variables.
    ///
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    ///
    /// # Environment Variables
    ///
    /// - `SLATEPORT_API_BASE_URL`: Default `http://localhost:5000/api`
    /// - `SLATEPORT_HTTP_TIMEOUT_SECS`: Default 30
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SLATEPORT_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "http://localhost:5000/api".to_string()),
            timeout_secs: std::env::var("SLATEPORT_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Builds an `ApiConfig` pointing at the given base URL, keeping the
    /// default timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// The per-request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_timeout_as_duration() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 5,
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_with_base_url_keeps_default_timeout() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:4010/api");
        assert_eq!(config.base_url, "http://127.0.0.1:4010/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_clone_and_equality() {
        let config = ApiConfig::default();
        assert_eq!(config, config.clone());
    }
}
