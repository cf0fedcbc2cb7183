//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing session tokens
    pub secret: String,

    /// Session token expiry time in seconds
    pub session_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            session_token_expiry: 7200, // 2 hours
            issuer: String::from("sentinel"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());
        let session_token_expiry = std::env::var("JWT_SESSION_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7200);
        let issuer = std::env::var("JWT_ISSUER").unwrap_or_else(|_| "sentinel".to_string());

        Self {
            secret,
            session_token_expiry,
            issuer,
        }
    }

    /// Set session token expiry in hours
    pub fn with_session_expiry_hours(mut self, hours: i64) -> Self {
        self.session_token_expiry = hours * 3600;
        self
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor; work doubles with each increment
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(12);

        Self { bcrypt_cost }
    }

    /// Set the bcrypt cost factor
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_jwt_config() {
        let config = JwtConfig::default();
        assert_eq!(config.session_token_expiry, 7200);
        assert_eq!(config.issuer, "sentinel");
    }

    #[test]
    fn test_session_expiry_hours() {
        let config = JwtConfig::new("secret").with_session_expiry_hours(2);
        assert_eq!(config.session_token_expiry, 7200);
    }

    #[test]
    fn test_default_password_config() {
        let config = PasswordConfig::default();
        assert!(config.bcrypt_cost >= 10);
    }
}
