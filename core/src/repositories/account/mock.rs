//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

/// Mock account repository for testing
///
/// The duplicate-email check happens under the write lock, so concurrent
/// `create` calls for the same email cannot both succeed.
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts (test helper)
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether the repository is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}
