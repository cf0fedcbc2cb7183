//! Traits for notification channel integration

use async_trait::async_trait;

/// Trait for the email notification channel
///
/// The channel carries the one-time code to the user inside the message
/// body only; it never hands the code back as a return value. Invoked by
/// the auth orchestrator, never by the code service.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send an email, returning the provider's message id
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;

    /// Check if the recipient address format is valid
    fn is_valid_email(&self, email: &str) -> bool;
}

#[async_trait]
impl EmailServiceTrait for Box<dyn EmailServiceTrait> {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        (**self).send(to, subject, body).await
    }

    fn is_valid_email(&self, email: &str) -> bool {
        (**self).is_valid_email(email)
    }
}
