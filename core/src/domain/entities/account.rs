//! Account entity representing a registered user in the Sentinel system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered user
///
/// The email address is the account's identity and is stored normalized
/// (trimmed, lowercased); uniqueness is enforced by the store. The password
/// is held only as a self-describing bcrypt digest (salt and cost embedded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Normalized email address, unique across accounts
    pub email: String,

    /// bcrypt digest of the account password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance
    ///
    /// The caller is responsible for normalizing the email and hashing the
    /// password before construction; this constructor only assembles state.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
