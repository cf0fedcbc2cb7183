//! Session token claims for JWT-based authentication.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token expiration time (2 hours)
pub const SESSION_TOKEN_EXPIRY_HOURS: i64 = 2;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "sentinel";

/// Claims structure for the session token payload
///
/// The token is self-contained: it binds the account id and email to an
/// absolute expiry, and the server keeps no session state for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Email address the session was authenticated for
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account's UUID
    /// * `email` - The authenticated email address
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring 2 hours from now
    pub fn new_session_token(account_id: Uuid, email: String) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(SESSION_TOKEN_EXPIRY_HOURS);

        Self {
            sub: account_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Gets the expiry as a UTC timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}
