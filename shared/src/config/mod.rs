//! Configuration modules for the Sentinel backend.
//!
//! Each concern gets its own struct with a `Default`, an env-var loader and
//! builder-style setters. Configuration is constructed once at startup and
//! passed into components explicitly; nothing reads ambient globals after
//! boot.

pub mod auth;
pub mod database;
pub mod email;
pub mod server;

pub use auth::{JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;
