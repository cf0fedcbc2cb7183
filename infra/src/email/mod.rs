//! Email Delivery Module
//!
//! Implementations of the core notification channel trait:
//!
//! - **Mock Implementation**: console output for development and tests
//! - **HTTP Mail API**: production delivery through a JSON mail API
//! - **Address masking**: recipient addresses never appear whole in logs

pub mod http_email;
pub mod mock_email;

pub use http_email::HttpEmailService;
pub use mock_email::MockEmailService;

use sentinel_core::services::auth::EmailServiceTrait;
use sentinel_shared::config::EmailConfig;

/// Create an email service based on configuration
///
/// Returns the implementation selected by `config.provider`, falling back
/// to the mock sender when the requested provider is unknown or
/// incompletely configured.
pub fn create_email_service(config: &EmailConfig) -> Box<dyn EmailServiceTrait> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailService::new()),
        "http" => match HttpEmailService::new(config.clone()) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Box::new(MockEmailService::new())
            }
        },
        _ => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockEmailService::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_unknown_provider_falls_back_to_mock() {
        let config = EmailConfig::default().with_provider("carrier-pigeon");
        // Falls back without panicking; the returned channel is usable
        let service = create_email_service(&config);
        assert!(service.is_valid_email("a@x.com"));
    }

    #[test]
    fn test_factory_http_without_url_falls_back_to_mock() {
        let config = EmailConfig::default().with_provider("http");
        let service = create_email_service(&config);
        assert!(service.is_valid_email("a@x.com"));
    }
}
