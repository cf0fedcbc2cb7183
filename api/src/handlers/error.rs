//! Domain error to HTTP response mapping.
//!
//! Every enumerated business outcome maps to a distinct, stable error code.
//! Unexpected persistence or internal failures collapse into an opaque 500:
//! the detail is logged here and never leaves the process.

use actix_web::HttpResponse;

use sentinel_core::errors::{AuthError, CodeError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", "Invalid email or password"),
            ),
            AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(
                ErrorResponse::new("email_already_registered", "Email already registered"),
            ),
            AuthError::DeliveryFailure => HttpResponse::BadGateway().json(ErrorResponse::new(
                "delivery_failed",
                "Verification code could not be delivered. Please try again",
            )),
        },
        DomainError::Code(code_error) => {
            let (code, message) = match code_error {
                CodeError::NotFound => ("code_not_found", "No verification code found"),
                CodeError::AlreadyUsed => ("code_already_used", "Verification code already used"),
                CodeError::Mismatch => ("invalid_code", "Invalid verification code"),
                CodeError::Expired => ("code_expired", "Verification code expired"),
            };
            HttpResponse::BadRequest().json(ErrorResponse::new(code, message))
        }
        DomainError::Token(token_error) => match token_error {
            TokenError::Expired => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("token_expired", "Session token expired")),
            TokenError::GenerationFailed => {
                log::error!("Token generation failed");
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "internal_error",
                    "An internal error occurred",
                ))
            }
            _ => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("invalid_token", "Invalid session token")),
        },
        DomainError::ValidationErr(validation_error) => HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error", validation_error.to_string()),
        ),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Database { message } | DomainError::Internal { message } => {
            // Log the detail, expose none of it
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_business_outcomes_map_to_distinct_statuses() {
        let conflict = handle_domain_error(AuthError::EmailAlreadyRegistered.into());
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let unauthorized = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);

        let delivery = handle_domain_error(AuthError::DeliveryFailure.into());
        assert_eq!(delivery.status(), StatusCode::BAD_GATEWAY);

        let replay = handle_domain_error(CodeError::AlreadyUsed.into());
        assert_eq!(replay.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_errors_are_opaque() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused to mysql://secret-host".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
