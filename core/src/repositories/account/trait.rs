//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations must enforce email uniqueness atomically: `create` with
/// an email that is already present fails with
/// `AuthError::EmailAlreadyRegistered` rather than relying on callers to
/// check first. Emails are stored and compared in normalized (lowercase)
/// form.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - Email taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Find an account by its normalized email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Check whether an account exists for the given normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
