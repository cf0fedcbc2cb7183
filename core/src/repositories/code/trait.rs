//! One-time-code repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

/// Repository trait for OneTimeCode persistence operations
///
/// Codes are append-only except for the single `is_used` transition, which
/// `mark_used` performs as an atomic conditional update: the flag moves
/// false→true only if it was false, indivisibly with respect to concurrent
/// callers. Rows are never deleted; superseded codes simply become
/// unreachable through `find_latest_for_account`.
#[async_trait]
pub trait CodeRepository: Send + Sync {
    /// Persist a newly issued code
    async fn create(&self, code: OneTimeCode) -> Result<OneTimeCode, DomainError>;

    /// Find the most recently issued code for an account
    ///
    /// Ordering is by issuance (`created_at`, then insertion order as a
    /// tiebreak); only this record is eligible for verification.
    ///
    /// # Returns
    /// * `Ok(Some(OneTimeCode))` - Latest code found
    /// * `Ok(None)` - No code has been issued for the account
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_latest_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<OneTimeCode>, DomainError>;

    /// Atomically mark a code as used
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the false→true transition
    /// * `Ok(false)` - The code was already used (or does not exist)
    /// * `Err(DomainError)` - Database or other error occurred
    async fn mark_used(&self, code_id: Uuid) -> Result<bool, DomainError>;
}
