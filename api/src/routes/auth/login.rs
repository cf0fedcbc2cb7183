use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::error_dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use sentinel_core::repositories::{AccountRepository, CodeRepository};
use sentinel_core::services::auth::EmailServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates the password and dispatches a one-time code to the
/// account's email address. The response never reveals whether the email
/// exists; bad email and bad password are the same 401.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "the-password"
/// }
/// ```
///
/// # Responses
/// - 200 OK: code dispatched, check your email
/// - 400 Bad Request: malformed request data
/// - 401 Unauthorized: invalid credentials
/// - 502 Bad Gateway: code could not be delivered
/// - 500 Internal Server Error: database failure
pub async fn login<A, C, M>(
    state: web::Data<AppState<A, C, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(dispatch) => HttpResponse::Ok().json(LoginResponse {
            message: "Check your email for verification code".to_string(),
            code_expires_at: dispatch.expires_at,
        }),
        Err(error) => handle_domain_error(error),
    }
}
