use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{RegisterRequest, RegisterResponse};
use crate::dto::error_dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use sentinel_core::repositories::{AccountRepository, CodeRepository};
use sentinel_core::services::auth::EmailServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account with a hashed password.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "at-least-8-chars"
/// }
/// ```
///
/// # Responses
/// - 201 Created: account registered
/// - 400 Bad Request: invalid email or password length
/// - 409 Conflict: email already registered
/// - 500 Internal Server Error: database or hashing failure
pub async fn register<A, C, M>(
    state: web::Data<AppState<A, C, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CodeRepository + 'static,
    M: EmailServiceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        let mut details = std::collections::HashMap::new();
        details.insert("validation_errors".to_string(), serde_json::json!(errors));

        return HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
        );
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(_account) => HttpResponse::Created().json(RegisterResponse {
            message: "User registered".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
