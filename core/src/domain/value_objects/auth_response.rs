//! Result values for login and verification operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a successful login: a code was issued and dispatched.
///
/// The plaintext code is deliberately absent; once handed to the
/// notification channel it exists nowhere else in a response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDispatch {
    /// When the dispatched code expires
    pub expires_at: DateTime<Utc>,

    /// Delivery message id reported by the notification channel
    pub message_id: String,
}

/// Outcome of a successful code verification: an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}

impl AuthResponse {
    /// Create an authentication response from a freshly minted token
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}
