//! MySQL repository implementations.

pub mod account_repository_impl;
pub mod code_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use code_repository_impl::MySqlCodeRepository;
