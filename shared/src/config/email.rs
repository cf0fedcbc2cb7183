//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Email delivery configuration
///
/// The `provider` field selects the concrete implementation at startup:
/// `"mock"` logs messages to the console, `"http"` delivers through the
/// configured mail API endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Delivery provider: "mock" or "http"
    pub provider: String,

    /// Mail API endpoint URL (http provider)
    pub api_url: String,

    /// Mail API key (http provider)
    pub api_key: String,

    /// Sender address shown to recipients
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,

    /// Maximum retry attempts for failed deliveries
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@sentinel.local"),
            from_name: String::from("Sentinel"),
            request_timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or(defaults.provider),
            api_url: std::env::var("EMAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            max_retries: std::env::var("EMAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("EMAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
        }
    }

    /// Set the delivery provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the sender address
    pub fn with_from_address(mut self, address: impl Into<String>) -> Self {
        self.from_address = address.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mock() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, "mock");
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_methods() {
        let config = EmailConfig::default()
            .with_provider("http")
            .with_from_address("auth@example.com");
        assert_eq!(config.provider, "http");
        assert_eq!(config.from_address, "auth@example.com");
    }
}
