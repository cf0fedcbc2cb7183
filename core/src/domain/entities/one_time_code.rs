//! One-time code entity for email-based login verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for one-time codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// One-time code entity for email-based login verification
///
/// Codes for the same account are ordered by issuance; only the most
/// recently issued code is eligible for verification, so older codes are
/// superseded without being touched. The `is_used` flag moves false→true
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCode {
    /// Unique identifier for the code record
    pub id: Uuid,

    /// Account this code was issued for
    pub account_id: Uuid,

    /// The 6-digit code value, zero-padded
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_used: bool,
}

impl OneTimeCode {
    /// Creates a new one-time code with a cryptographically secure random
    /// 6-digit value and the default 5-minute expiry
    pub fn new(account_id: Uuid) -> Self {
        Self::new_with_expiration(account_id, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new one-time code with a custom expiration time
    pub fn new_with_expiration(account_id: Uuid, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            id: Uuid::new_v4(),
            account_id,
            code,
            created_at: now,
            expires_at,
            is_used: false,
        }
    }

    /// Generates a uniformly random 6-digit code from the OS CSPRNG
    ///
    /// Uses `OsRng` rather than a general-purpose PRNG: the code is a
    /// credential and must not be guessable by construction. The modulo
    /// bias over a u32 is negligible for a 6-digit range.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes);
        let code = num % 1_000_000;
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a submitted value against this code in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        if submitted.len() != self.code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Marks the code as used
    pub fn mark_as_used(&mut self) {
        self.is_used = true;
    }
}
