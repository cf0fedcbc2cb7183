//! HTTP Mail API Email Service Implementation
//!
//! Production delivery through a JSON mail API (bearer-authenticated
//! endpoint). Includes bounded retries with a fixed delay, request
//! timeouts, and recipient masking in logs.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use sentinel_core::services::auth::EmailServiceTrait;
use sentinel_shared::config::EmailConfig;
use sentinel_shared::utils::{is_valid_email, mask_email};

use crate::InfrastructureError;

/// Outbound message payload for the mail API
#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: Sender<'a>,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Sender<'a> {
    email: &'a str,
    name: &'a str,
}

/// HTTP mail API email service
pub struct HttpEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    ///
    /// Fails fast on incomplete configuration so startup surfaces the
    /// problem instead of the first login attempt.
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_URL not set".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        info!(
            endpoint = %config.api_url,
            from = %mask_email(&config.from_address),
            "HTTP email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env())
    }

    /// Perform a single delivery attempt
    async fn send_once(&self, to: &str, subject: &str, text: &str) -> Result<String, String> {
        let message = OutboundMessage {
            from: Sender {
                email: &self.config.from_address,
                name: &self.config.from_name,
            },
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&message)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("Mail API returned {}: {}", status, detail));
        }

        // Providers answer with a message id; fall back to a placeholder if
        // the body is not the expected shape
        let message_id = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("id").and_then(|id| id.as_str()).map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());

        Ok(message_id)
    }
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        let mut last_error = String::new();
        for attempt in 1..=self.config.max_retries.max(1) {
            match self.send_once(to, subject, body).await {
                Ok(message_id) => {
                    info!(
                        to = %mask_email(to),
                        message_id = %message_id,
                        attempt = attempt,
                        "Email delivered"
                    );
                    return Ok(message_id);
                }
                Err(e) => {
                    warn!(
                        to = %mask_email(to),
                        attempt = attempt,
                        error = %e,
                        "Email delivery attempt failed"
                    );
                    last_error = e;

                    if attempt < self.config.max_retries {
                        debug!(delay_ms = self.config.retry_delay_ms, "Retrying delivery");
                        tokio::time::sleep(Duration::from_millis(self.config.retry_delay_ms)).await;
                    }
                }
            }
        }

        error!(
            to = %mask_email(to),
            "Email delivery failed after {} attempts",
            self.config.max_retries.max(1)
        );
        Err(last_error)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
