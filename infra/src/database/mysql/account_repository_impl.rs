//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sentinel_core::domain::entities::account::Account;
use sentinel_core::errors::{AuthError, DomainError};
use sentinel_core::repositories::AccountRepository;
use sentinel_shared::utils::mask_email;

/// MySQL implementation of AccountRepository
///
/// Email uniqueness rests on the `accounts.email` unique index: `create`
/// inserts unconditionally and maps the duplicate-key violation to the
/// conflict error, so there is no check-then-insert window.
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            Err(e) => {
                let is_duplicate = e
                    .as_database_error()
                    .map(|d| d.is_unique_violation())
                    .unwrap_or(false);

                if is_duplicate {
                    tracing::warn!(
                        email = %mask_email(&account.email),
                        event = "duplicate_registration",
                        "Insert rejected by unique email index"
                    );
                    Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
                } else {
                    Err(DomainError::Database {
                        message: format!("Failed to create account: {}", e),
                    })
                }
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, created_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) as count FROM accounts WHERE email = ?";

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        let count: i64 = row.try_get("count").map_err(|e| DomainError::Database {
            message: format!("Failed to get count: {}", e),
        })?;

        Ok(count > 0)
    }
}
