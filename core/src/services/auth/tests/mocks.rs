//! Mock notification channel for auth service tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::services::auth::EmailServiceTrait;

/// A sent email captured by the mock channel
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl SentEmail {
    /// Extract the 6-digit code from the message body
    pub fn extract_code(&self) -> Option<String> {
        let digits: Vec<String> = self
            .body
            .split_whitespace()
            .filter(|w| w.len() == 6 && w.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .collect();
        digits.into_iter().next()
    }
}

/// Recording mock of the email channel
///
/// Captures every message so tests can pull the dispatched code back out,
/// and can be flipped into failure mode to exercise the delivery-error
/// path.
pub struct MockEmailService {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    send_count: AtomicU64,
    fail_next: AtomicBool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            send_count: AtomicU64::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make every subsequent send fail
    pub fn set_failing(&self, failing: bool) {
        self.fail_next.store(failing, Ordering::SeqCst);
    }

    /// Total number of successful sends
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    /// The most recently sent message, if any
    pub async fn last_sent(&self) -> Option<SentEmail> {
        self.sent.lock().await.last().cloned()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.fail_next.load(Ordering::SeqCst) {
            return Err("simulated delivery failure".to_string());
        }

        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.sent.lock().await.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        Ok(format!("mock-message-{}", count))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        sentinel_shared::utils::is_valid_email(email)
    }
}
