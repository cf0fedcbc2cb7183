//! Code issuance and verification service.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::{CodeError, DomainResult};
use crate::repositories::CodeRepository;

use super::config::CodeServiceConfig;

/// Service owning the one-time-code state machine
///
/// Issued codes are persisted immediately; the returned entity is the only
/// place the plaintext value exists outside the delivery channel — it is
/// not re-derivable from storage lookups by anyone who lacks the record.
pub struct CodeService<C: CodeRepository> {
    /// Code repository for persistence
    repository: Arc<C>,
    /// Service configuration
    config: CodeServiceConfig,
}

impl<C: CodeRepository> CodeService<C> {
    /// Create a new code service
    pub fn new(repository: Arc<C>, config: CodeServiceConfig) -> Self {
        Self { repository, config }
    }

    /// Issue a new code for an account
    ///
    /// Generates a uniformly random 6-digit value from the OS CSPRNG,
    /// stamps the configured expiry window and persists the record unused.
    /// Any previously issued codes for the account are superseded by the
    /// latest-lookup rule; they are not touched.
    ///
    /// # Returns
    ///
    /// * `Ok(OneTimeCode)` - The persisted code, plaintext included
    /// * `Err(DomainError)` - Persistence failed
    pub async fn issue(&self, account_id: Uuid) -> DomainResult<OneTimeCode> {
        let code =
            OneTimeCode::new_with_expiration(account_id, self.config.code_expiration_minutes);

        let stored = self.repository.create(code).await?;

        tracing::info!(
            account_id = %account_id,
            code_id = %stored.id,
            expires_at = %stored.expires_at,
            event = "code_issued",
            "Issued one-time code"
        );

        Ok(stored)
    }

    /// Verify a submitted code for an account
    ///
    /// Only the most recently issued code is eligible. The checks run in a
    /// fixed order — missing, used, mismatch, expired — so multi-violation
    /// inputs fail deterministically, and the used transition is an atomic
    /// compare-and-set at the store: of any number of concurrent callers
    /// submitting the same valid code, exactly one observes success.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code accepted and consumed
    /// * `Err(DomainError::Code(_))` - One of the four rejection outcomes
    /// * `Err(DomainError)` - Store failure
    pub async fn verify(&self, account_id: Uuid, submitted: &str) -> DomainResult<()> {
        let record = self
            .repository
            .find_latest_for_account(account_id)
            .await?
            .ok_or(CodeError::NotFound)?;

        if record.is_used {
            tracing::warn!(
                account_id = %account_id,
                code_id = %record.id,
                event = "code_replayed",
                "Rejected already-used code"
            );
            return Err(CodeError::AlreadyUsed.into());
        }

        if !record.matches(submitted) {
            tracing::warn!(
                account_id = %account_id,
                code_id = %record.id,
                event = "code_mismatch",
                "Rejected mismatched code"
            );
            return Err(CodeError::Mismatch.into());
        }

        if record.is_expired() {
            tracing::warn!(
                account_id = %account_id,
                code_id = %record.id,
                event = "code_expired",
                "Rejected expired code"
            );
            return Err(CodeError::Expired.into());
        }

        // Store-level CAS: at most one concurrent caller wins this transition.
        if !self.repository.mark_used(record.id).await? {
            return Err(CodeError::AlreadyUsed.into());
        }

        tracing::info!(
            account_id = %account_id,
            code_id = %record.id,
            event = "code_verified",
            "One-time code verified and consumed"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::MockCodeRepository;
    use chrono::{Duration, Utc};

    fn service(repo: Arc<MockCodeRepository>) -> CodeService<MockCodeRepository> {
        CodeService::new(repo, CodeServiceConfig::default())
    }

    fn assert_code_error(result: DomainResult<()>, expected: CodeError) {
        match result {
            Err(DomainError::Code(actual)) => assert_eq!(actual, expected),
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }

    #[tokio::test]
    async fn test_issue_persists_unused_code() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo.clone());
        let account_id = Uuid::new_v4();

        let code = service.issue(account_id).await.unwrap();

        assert_eq!(code.account_id, account_id);
        assert!(!code.is_used);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_verify_accepts_then_rejects_replay() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo.clone());
        let account_id = Uuid::new_v4();

        let code = service.issue(account_id).await.unwrap();

        service.verify(account_id, &code.code).await.unwrap();
        assert_code_error(
            service.verify(account_id, &code.code).await,
            CodeError::AlreadyUsed,
        );
    }

    #[tokio::test]
    async fn test_verify_no_code() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo);

        assert_code_error(
            service.verify(Uuid::new_v4(), "123456").await,
            CodeError::NotFound,
        );
    }

    #[tokio::test]
    async fn test_verify_mismatch() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo);
        let account_id = Uuid::new_v4();

        let code = service.issue(account_id).await.unwrap();
        let wrong = if code.code == "000000" { "000001" } else { "000000" };

        assert_code_error(service.verify(account_id, wrong).await, CodeError::Mismatch);
    }

    #[tokio::test]
    async fn test_verify_expired_with_correct_value() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo.clone());
        let account_id = Uuid::new_v4();

        let mut code = service.issue(account_id).await.unwrap();
        code.expires_at = Utc::now() - Duration::seconds(1);
        repo.put(code.clone()).await;

        assert_code_error(
            service.verify(account_id, &code.code).await,
            CodeError::Expired,
        );
    }

    #[tokio::test]
    async fn test_precedence_used_before_mismatch_before_expired() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo.clone());
        let account_id = Uuid::new_v4();

        // Used + wrong value + expired: the used check wins
        let mut code = service.issue(account_id).await.unwrap();
        code.is_used = true;
        code.expires_at = Utc::now() - Duration::seconds(1);
        repo.put(code.clone()).await;
        let wrong = if code.code == "000000" { "000001" } else { "000000" };
        assert_code_error(
            service.verify(account_id, wrong).await,
            CodeError::AlreadyUsed,
        );

        // Wrong value + expired, not used: the mismatch check wins
        let account_id = Uuid::new_v4();
        let mut code = service.issue(account_id).await.unwrap();
        code.expires_at = Utc::now() - Duration::seconds(1);
        repo.put(code.clone()).await;
        let wrong = if code.code == "000000" { "000001" } else { "000000" };
        assert_code_error(service.verify(account_id, wrong).await, CodeError::Mismatch);
    }

    #[tokio::test]
    async fn test_only_latest_code_is_eligible() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = service(repo.clone());
        let account_id = Uuid::new_v4();

        let mut first = service.issue(account_id).await.unwrap();
        first.created_at = first.created_at - Duration::seconds(30);
        repo.put(first.clone()).await;
        let second = service.issue(account_id).await.unwrap();

        // The superseded code no longer verifies even though it is intact
        if first.code != second.code {
            assert_code_error(
                service.verify(account_id, &first.code).await,
                CodeError::Mismatch,
            );
        }
        service.verify(account_id, &second.code).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_verification_single_winner() {
        let repo = Arc::new(MockCodeRepository::new());
        let service = Arc::new(service(repo));
        let account_id = Uuid::new_v4();

        let code = service.issue(account_id).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            let value = code.code.clone();
            handles.push(tokio::spawn(async move {
                service.verify(account_id, &value).await
            }));
        }

        let mut successes = 0;
        let mut already_used = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => successes += 1,
                Err(DomainError::Code(CodeError::AlreadyUsed)) => already_used += 1,
                other => panic!("unexpected outcome: {:?}", other),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(already_used, 7);
    }
}
