//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;

/// Create the CORS middleware
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (comma-separated); absent that,
/// any origin is accepted, which is only appropriate behind a gateway.
pub fn create_cors() -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600);

    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        Err(_) => cors.allow_any_origin(),
    }
}
