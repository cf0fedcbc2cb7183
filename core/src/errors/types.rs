//! Domain-specific error types for authentication and related operations
//!
//! Every enumerated business outcome maps to its own stable variant so the
//! transport layer can expose distinct, caller-visible error kinds without
//! leaking internal detail.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. The two causes are deliberately
    /// merged so callers cannot enumerate registered accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Verification code could not be delivered")]
    DeliveryFailure,
}

/// One-time-code verification errors
///
/// The variants mirror the verification state machine. Check order is part
/// of the contract: used precedes mismatch precedes expired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("No verification code found")]
    NotFound,

    #[error("Verification code already used")]
    AlreadyUsed,

    #[error("Invalid verification code")]
    Mismatch,

    #[error("Verification code expired")]
    Expired,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid length: {field} (expected {expected}, actual {actual})")]
    InvalidLength {
        field: String,
        expected: String,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_names_no_cause() {
        // The message must not reveal whether the account exists
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("not found"));
        assert!(!message.to_lowercase().contains("no such"));
    }

    #[test]
    fn test_code_error_messages() {
        assert_eq!(
            CodeError::AlreadyUsed.to_string(),
            "Verification code already used"
        );
        assert_eq!(CodeError::Expired.to_string(), "Verification code expired");
    }

    #[test]
    fn test_validation_error_fields() {
        let error = ValidationError::InvalidLength {
            field: "code".to_string(),
            expected: "6".to_string(),
            actual: 4,
        };
        let message = error.to_string();
        assert!(message.contains("code"));
        assert!(message.contains('6'));
    }
}
