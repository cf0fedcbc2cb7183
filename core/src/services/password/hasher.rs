//! bcrypt password hashing and verification.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Minimum acceptable bcrypt cost factor
const MIN_COST: u32 = 10;

/// Password hashing service backed by bcrypt
///
/// The digest is self-describing: salt and cost are embedded, so
/// verification needs no side channel. Hashing is deliberately expensive;
/// the async wrappers run it on the blocking thread pool and no lock is
/// ever held across a hash.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given cost factor
    ///
    /// Costs below the offline-brute-force floor are raised to it.
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.max(MIN_COST),
        }
    }

    /// Hash a password with a fresh random salt
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Self-describing bcrypt digest
    /// * `Err(DomainError::Internal)` - Hashing failed (never a business outcome)
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Verify a password against a stored digest
    ///
    /// A wrong password is a normal `Ok(false)`, never an error. A digest
    /// that cannot be parsed indicates corrupted storage and surfaces as an
    /// internal error, distinct from a mismatch.
    pub fn verify(&self, password: &str, digest: &str) -> DomainResult<bool> {
        verify(password, digest).map_err(|e| DomainError::Internal {
            message: format!("Malformed password digest: {}", e),
        })
    }

    /// Hash on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> DomainResult<String> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    /// Verify on the blocking thread pool
    pub async fn verify_async(&self, password: String, digest: String) -> DomainResult<bool> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
