//! Configuration for the token service

use crate::domain::entities::token::{JWT_ISSUER, SESSION_TOKEN_EXPIRY_HOURS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret key for HS256 signing
    pub jwt_secret: String,

    /// Session token lifetime in seconds
    pub session_token_expiry: i64,

    /// Issuer claim stamped into and required from every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            session_token_expiry: SESSION_TOKEN_EXPIRY_HOURS * 3600,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
