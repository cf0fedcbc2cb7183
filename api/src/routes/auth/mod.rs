//! Authentication routes: register, login, verify-code.

pub mod login;
pub mod register;
pub mod verify_code;

use std::sync::Arc;

use sentinel_core::repositories::{AccountRepository, CodeRepository};
use sentinel_core::services::auth::{AuthService, EmailServiceTrait};

/// Shared application state handed to every handler
pub struct AppState<A, C, M>
where
    A: AccountRepository,
    C: CodeRepository,
    M: EmailServiceTrait,
{
    /// The authentication service orchestrating all operations
    pub auth_service: Arc<AuthService<A, C, M>>,
}
