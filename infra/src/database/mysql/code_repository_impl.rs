//! MySQL implementation of the CodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sentinel_core::domain::entities::one_time_code::OneTimeCode;
use sentinel_core::errors::DomainError;
use sentinel_core::repositories::CodeRepository;

/// MySQL implementation of CodeRepository
///
/// Rows are append-only; the only mutation is the conditional `is_used`
/// update in `mark_used`, which is atomic at the row level so concurrent
/// verifications cannot both consume the same code.
pub struct MySqlCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCodeRepository {
    /// Create a new MySQL code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to OneTimeCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<OneTimeCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let account_id: String = row
            .try_get("account_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get account_id: {}", e),
            })?;

        Ok(OneTimeCode {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            account_id: Uuid::parse_str(&account_id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_used: row.try_get("is_used").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_used: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl CodeRepository for MySqlCodeRepository {
    async fn create(&self, code: OneTimeCode) -> Result<OneTimeCode, DomainError> {
        let query = r#"
            INSERT INTO one_time_codes (id, account_id, code, created_at, expires_at, is_used)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(code.account_id.to_string())
            .bind(&code.code)
            .bind(code.created_at)
            .bind(code.expires_at)
            .bind(code.is_used)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create code: {}", e),
            })?;

        Ok(code)
    }

    async fn find_latest_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<OneTimeCode>, DomainError> {
        // Latest-wins rule: only the newest row is eligible for verification
        let query = r#"
            SELECT id, account_id, code, created_at, expires_at, is_used
            FROM one_time_codes
            WHERE account_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(account_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_code(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, code_id: Uuid) -> Result<bool, DomainError> {
        // Conditional update: the WHERE clause makes the false→true
        // transition a compare-and-set, so at most one caller sees a row
        // change
        let query = r#"
            UPDATE one_time_codes
            SET is_used = TRUE
            WHERE id = ? AND is_used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(code_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark code used: {}", e),
            })?;

        Ok(result.rows_affected() == 1)
    }
}
