//! Mock implementation of CodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::one_time_code::OneTimeCode;
use crate::errors::DomainError;

use super::trait_::CodeRepository;

/// Mock one-time-code repository for testing
///
/// `mark_used` performs its check-and-set under the write lock, matching
/// the compare-and-set contract of the production store: exactly one of any
/// number of concurrent callers gets `true`.
pub struct MockCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, OneTimeCode>>>,
}

impl MockCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored codes (test helper)
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the repository is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }

    /// Overwrite a stored code (test helper for forcing expiry etc.)
    pub async fn put(&self, code: OneTimeCode) {
        self.codes.write().await.insert(code.id, code);
    }
}

impl Default for MockCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRepository for MockCodeRepository {
    async fn create(&self, code: OneTimeCode) -> Result<OneTimeCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_latest_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<OneTimeCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .filter(|c| c.account_id == account_id)
            .max_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn mark_used(&self, code_id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.get_mut(&code_id) {
            Some(code) if !code.is_used => {
                code.mark_as_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
