//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Minimum accepted password length at registration
    pub min_password_length: usize,

    /// Maximum accepted password length at registration
    pub max_password_length: usize,

    /// Display name used in outbound email subjects
    pub product_name: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            max_password_length: 128,
            product_name: String::from("Sentinel"),
        }
    }
}
