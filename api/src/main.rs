use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use sentinel_core::services::auth::{AuthService, AuthServiceConfig, EmailServiceTrait};
use sentinel_core::services::password::PasswordHasher;
use sentinel_core::services::token::{TokenService, TokenServiceConfig};
use sentinel_core::services::verification::{CodeService, CodeServiceConfig};
use sentinel_infra::database::{create_pool, MySqlAccountRepository, MySqlCodeRepository};
use sentinel_infra::email::create_email_service;
use sentinel_shared::config::{
    DatabaseConfig, EmailConfig, JwtConfig, PasswordConfig, ServerConfig,
};

use sentinel_api::app::create_app;
use sentinel_api::routes::auth::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Sentinel API server");

    // Load configuration once; components receive it at construction
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let password_config = PasswordConfig::from_env();
    let email_config = EmailConfig::from_env();

    // Database connections and repositories
    let pool = create_pool(&database_config)
        .await
        .expect("Failed to create database connection pool");
    let account_repository = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let code_repository = Arc::new(MySqlCodeRepository::new(pool));

    // Services
    let code_service = Arc::new(CodeService::new(
        code_repository,
        CodeServiceConfig::default(),
    ));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: jwt_config.secret,
        session_token_expiry: jwt_config.session_token_expiry,
        issuer: jwt_config.issuer,
    }));
    let password_hasher = Arc::new(PasswordHasher::new(password_config.bcrypt_cost));
    let email_service: Arc<Box<dyn EmailServiceTrait>> =
        Arc::new(create_email_service(&email_config));

    let auth_service = Arc::new(AuthService::new(
        account_repository,
        code_service,
        token_service,
        password_hasher,
        email_service,
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState { auth_service });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
