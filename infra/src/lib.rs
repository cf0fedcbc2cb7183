//! # Sentinel Infrastructure
//!
//! Infrastructure layer for the Sentinel backend: MySQL implementations of
//! the core repository traits and email delivery implementations of the
//! notification channel.

pub mod database;
pub mod email;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery error: {0}")]
    Email(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
