//! Application factory
//!
//! Builds the Actix-web application around a prepared `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login::login, register::register, verify_code::verify_code, AppState};

use sentinel_core::repositories::{AccountRepository, CodeRepository};
use sentinel_core::services::auth::EmailServiceTrait;

/// Create and configure the application with all dependencies
pub fn create_app<A, C, M>(
    app_state: web::Data<AppState<A, C, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    C: CodeRepository + 'static,
    M: EmailServiceTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<A, C, M>))
                    .route("/login", web::post().to(login::<A, C, M>))
                    .route("/verify-code", web::post().to(verify_code::<A, C, M>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "sentinel-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource does not exist",
    }))
}
