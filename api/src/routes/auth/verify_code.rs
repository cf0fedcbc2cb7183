use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::dto::error_dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use sentinel_core::repositories::{AccountRepository, CodeRepository};
use sentinel_core::services::auth::EmailServiceTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/verify-code
///
/// Verifies the one-time code sent to the account's email and, on success,
/// returns a signed session token. Each code is consumable exactly once.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "code": "482913"
/// }
/// ```
///
/// # Responses
/// - 200 OK: `{message, token, expires_in}`
/// - 400 Bad Request: code not found, already used, wrong, or expired
/// - 500 Internal Server Error: database or token generation failure
pub async fn verify_code<A, C, M>(
    state: web::Data<AppState<A, C, M>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verify_code(&request.email, &request.code)
        .await
    {
        Ok(auth_response) => HttpResponse::Ok().json(VerifyCodeResponse {
            message: "Login successful".to_string(),
            token: auth_response.token,
            expires_in: auth_response.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
