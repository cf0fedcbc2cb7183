//! Main authentication service implementation

use std::sync::Arc;

use sentinel_shared::utils::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::account::Account;
use crate::domain::value_objects::{AuthResponse, CodeDispatch};
use crate::errors::{AuthError, CodeError, DomainError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, CodeRepository};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::verification::CodeService;

use super::config::AuthServiceConfig;
use super::traits::EmailServiceTrait;

/// Authentication service orchestrating the full login flow
///
/// Each login attempt walks a fixed state machine: password verified, code
/// issued and dispatched, code verified, session minted — with a terminal
/// failure exit at every stage.
pub struct AuthService<A, C, M>
where
    A: AccountRepository,
    C: CodeRepository,
    M: EmailServiceTrait,
{
    /// Account repository for database operations
    account_repository: Arc<A>,
    /// Code service for one-time-code issuance and consumption
    code_service: Arc<CodeService<C>>,
    /// Token service for session token minting
    token_service: Arc<TokenService>,
    /// Password hashing service
    password_hasher: Arc<PasswordHasher>,
    /// Email notification channel
    email_service: Arc<M>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<A, C, M> AuthService<A, C, M>
where
    A: AccountRepository,
    C: CodeRepository,
    M: EmailServiceTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account persistence
    /// * `code_service` - Service for one-time-code handling
    /// * `token_service` - Service for session token minting
    /// * `password_hasher` - Password hashing service
    /// * `email_service` - Notification channel for code delivery
    /// * `config` - Service configuration
    pub fn new(
        account_repository: Arc<A>,
        code_service: Arc<CodeService<C>>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<PasswordHasher>,
        email_service: Arc<M>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            code_service,
            token_service,
            password_hasher,
            email_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Validates the email format and password length
    /// 2. Normalizes the email (trim + lowercase)
    /// 3. Hashes the password on the blocking pool
    /// 4. Persists the account, relying on the store's atomic uniqueness
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))` - Conflict
    /// * `Err(DomainError::ValidationErr(_))` - Malformed input
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<Account> {
        // Step 1: Validate input
        if !is_valid_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }
        if password.len() < self.config.min_password_length
            || password.len() > self.config.max_password_length
        {
            return Err(DomainError::ValidationErr(ValidationError::InvalidLength {
                field: "password".to_string(),
                expected: format!(
                    "{}-{}",
                    self.config.min_password_length, self.config.max_password_length
                ),
                actual: password.len(),
            }));
        }

        let email = normalize_email(email);

        // Step 2: Hash the password off the async runtime
        let password_hash = self.password_hasher.hash_async(password.to_string()).await?;

        // Step 3: Persist; the store enforces uniqueness atomically so a
        // concurrent duplicate registration cannot slip through a
        // check-then-insert window
        let account = self
            .account_repository
            .create(Account::new(email.clone(), password_hash))
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&email),
            event = "account_registered",
            "Registered new account"
        );

        Ok(account)
    }

    /// Authenticate a password and dispatch a one-time code
    ///
    /// This method:
    /// 1. Looks up the account by normalized email
    /// 2. Verifies the password against the stored digest
    /// 3. Issues a one-time code
    /// 4. Delivers the code through the email channel
    ///
    /// An unknown email and a wrong password both produce
    /// `AuthError::InvalidCredentials`; callers cannot tell which occurred,
    /// so login cannot be used to enumerate registered addresses.
    ///
    /// # Returns
    ///
    /// * `Ok(CodeDispatch)` - Code issued and handed to the channel
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Bad credentials
    /// * `Err(DomainError::Auth(AuthError::DeliveryFailure))` - Channel error
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<CodeDispatch> {
        let email = normalize_email(email);

        // Step 1: Resolve the account
        let account = match self.account_repository.find_by_email(&email).await? {
            Some(account) => account,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "login_failed",
                    "Login for unknown email"
                );
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        // Step 2: Verify the password; a mismatch is the same caller-visible
        // outcome as an unknown email
        let password_ok = self
            .password_hasher
            .verify_async(password.to_string(), account.password_hash.clone())
            .await?;
        if !password_ok {
            tracing::warn!(
                account_id = %account.id,
                event = "login_failed",
                "Login with wrong password"
            );
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 3: Issue the code; this persists it and supersedes any
        // earlier codes for the account
        let code = self.code_service.issue(account.id).await?;

        // Step 4: Deliver out-of-band. The plaintext code travels only in
        // the message body
        let subject = format!("{} verification code", self.config.product_name);
        let body = format!(
            "Your verification code: {} (valid for 5 minutes)",
            code.code
        );

        let message_id = match self.email_service.send(&account.email, &subject, &body).await {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::error!(
                    account_id = %account.id,
                    error = %e,
                    event = "code_delivery_failed",
                    "Failed to deliver one-time code"
                );
                // The persisted code stays behind; the next login supersedes it
                return Err(DomainError::Auth(AuthError::DeliveryFailure));
            }
        };

        tracing::info!(
            account_id = %account.id,
            message_id = %message_id,
            event = "code_dispatched",
            "Dispatched one-time code"
        );

        Ok(CodeDispatch {
            expires_at: code.expires_at,
            message_id,
        })
    }

    /// Verify a one-time code and mint a session token
    ///
    /// Resolves the account, delegates the state machine to the code
    /// service, and on success issues a signed 2-hour session token. An
    /// email with no account behaves like an account with no code.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token and its lifetime in seconds
    /// * `Err(DomainError::Code(_))` - NotFound, AlreadyUsed, Mismatch or Expired
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);

        let account = self
            .account_repository
            .find_by_email(&email)
            .await?
            .ok_or(CodeError::NotFound)?;

        self.code_service.verify(account.id, code).await?;

        let token = self
            .token_service
            .issue_session_token(account.id, &account.email)?;

        tracing::info!(
            account_id = %account.id,
            event = "login_succeeded",
            "Code verified, session established"
        );

        Ok(AuthResponse::new(
            token,
            self.token_service.session_token_expiry(),
        ))
    }
}
