//! Mock Email Service Implementation
//!
//! A mock implementation of the notification channel for development and
//! testing. Messages are logged to the console instead of being delivered,
//! which is also how a developer reads the one-time code locally.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use sentinel_core::services::auth::EmailServiceTrait;
use sentinel_shared::utils::{is_valid_email, mask_email};

/// A message captured by the mock channel
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs messages to the console
/// - Validates recipient addresses
/// - Generates mock message IDs
/// - Records messages and tracks a counter for tests
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages recorded for test assertions
    recorded: Arc<Mutex<Vec<RecordedEmail>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            recorded: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// The most recently recorded message, if any
    pub async fn last_message(&self) -> Option<RecordedEmail> {
        self.recorded.lock().await.last().cloned()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("Invalid recipient address: {}", mask_email(to)));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                to = %mask_email(to),
                "Mock email service simulating delivery failure"
            );
            return Err("Simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            to = %mask_email(to),
            subject = subject,
            message_id = %message_id,
            total_sent = count,
            "Mock email delivered"
        );
        // Body goes to stdout so the code is readable during local development
        println!("--- mock email to {} ---\n{}\n{}", to, subject, body);

        self.recorded.lock().await.push(RecordedEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
