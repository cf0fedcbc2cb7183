//! Configuration for the code service

use crate::domain::entities::one_time_code::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the code service
#[derive(Debug, Clone)]
pub struct CodeServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
}

impl Default for CodeServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

impl CodeServiceConfig {
    /// Set the code expiry window in minutes
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.code_expiration_minutes = minutes;
        self
    }
}
