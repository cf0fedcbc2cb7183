//! Password hashing service.

mod hasher;

pub use hasher::PasswordHasher;
