//! Request and response data transfer objects.

pub mod auth_dto;
pub mod error_dto;

pub use auth_dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyCodeRequest,
    VerifyCodeResponse,
};
pub use error_dto::ErrorResponse;
