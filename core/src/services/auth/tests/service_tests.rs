//! Auth service orchestration tests
//!
//! These exercise the full flow against in-memory repositories and the
//! recording email channel: registration conflicts, the merged
//! invalid-credentials outcome, code dispatch and consumption, and the
//! session token contract.

use std::sync::Arc;

use crate::errors::{AuthError, CodeError, DomainError, ValidationError};
use crate::repositories::{
    AccountRepository, CodeRepository, MockAccountRepository, MockCodeRepository,
};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};
use crate::services::verification::{CodeService, CodeServiceConfig};

use super::mocks::MockEmailService;

struct Fixture {
    service: AuthService<MockAccountRepository, MockCodeRepository, MockEmailService>,
    accounts: Arc<MockAccountRepository>,
    codes: Arc<MockCodeRepository>,
    email: Arc<MockEmailService>,
    tokens: Arc<TokenService>,
}

fn fixture() -> Fixture {
    let accounts = Arc::new(MockAccountRepository::new());
    let codes = Arc::new(MockCodeRepository::new());
    let email = Arc::new(MockEmailService::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));
    let code_service = Arc::new(CodeService::new(codes.clone(), CodeServiceConfig::default()));

    let service = AuthService::new(
        accounts.clone(),
        code_service,
        tokens.clone(),
        Arc::new(PasswordHasher::new(10)),
        email.clone(),
        AuthServiceConfig::default(),
    );

    Fixture {
        service,
        accounts,
        codes,
        email,
        tokens,
    }
}

#[tokio::test]
async fn test_register_creates_account() {
    let f = fixture();

    let account = f.service.register("a@x.com", "password1").await.unwrap();

    assert_eq!(account.email, "a@x.com");
    assert_ne!(account.password_hash, "password1");
    assert_eq!(f.accounts.len().await, 1);
}

#[tokio::test]
async fn test_register_normalizes_email() {
    let f = fixture();

    let account = f
        .service
        .register("  Alice@Example.COM ", "password1")
        .await
        .unwrap();

    assert_eq!(account.email, "alice@example.com");
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let f = fixture();

    f.service.register("a@x.com", "password1").await.unwrap();
    let result = f.service.register("a@x.com", "password2").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
    assert_eq!(f.accounts.len().await, 1);
}

#[tokio::test]
async fn test_register_duplicate_case_insensitive() {
    let f = fixture();

    f.service.register("a@x.com", "password1").await.unwrap();
    let result = f.service.register("A@X.COM", "password2").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    let f = fixture();

    let result = f.service.register("not-an-email", "password1").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let result = f.service.register("a@x.com", "short").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));

    assert!(f.accounts.is_empty().await);
}

#[tokio::test]
async fn test_login_dispatches_code() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();

    let dispatch = f.service.login("a@x.com", "password1").await.unwrap();

    assert_eq!(f.email.send_count(), 1);
    let sent = f.email.last_sent().await.unwrap();
    assert_eq!(sent.to, "a@x.com");
    assert!(sent.subject.contains("verification code"));

    // The dispatched code is in the body, matches the stored record and
    // carries the 5-minute window
    let code = sent.extract_code().expect("body should carry a 6-digit code");
    let account = f.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    let stored = f
        .codes
        .find_latest_for_account(account.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.code, code);
    assert_eq!(dispatch.expires_at, stored.expires_at);
}

#[tokio::test]
async fn test_login_wrong_password_creates_no_code() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();

    let result = f.service.login("a@x.com", "wrong-password").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(f.codes.is_empty().await);
    assert_eq!(f.email.send_count(), 0);
}

#[tokio::test]
async fn test_login_unknown_email_same_outcome_as_wrong_password() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();

    let unknown = f.service.login("ghost@x.com", "password1").await;
    let wrong = f.service.login("a@x.com", "bad-password").await;

    // Both must look identical to the caller
    assert!(matches!(
        unknown,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        wrong,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_delivery_failure_is_surfaced() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();
    f.email.set_failing(true);

    let result = f.service.login("a@x.com", "password1").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DeliveryFailure))
    ));
    // The code was persisted before the channel failed; it stays behind
    // and is superseded by the next login
    assert_eq!(f.codes.len().await, 1);
}

#[tokio::test]
async fn test_end_to_end_login_flow() {
    let f = fixture();

    f.service.register("a@x.com", "pw1-long-enough").await.unwrap();
    f.service.login("a@x.com", "pw1-long-enough").await.unwrap();

    let code = f.email.last_sent().await.unwrap().extract_code().unwrap();

    let response = f.service.verify_code("a@x.com", &code).await.unwrap();
    assert_eq!(response.expires_in, 7200);

    // The token is genuine and carries the 2-hour expiry
    let claims = f.tokens.verify_session_token(&response.token).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.exp - claims.iat, 7200);

    // Replaying the same code is rejected
    let replay = f.service.verify_code("a@x.com", &code).await;
    assert!(matches!(
        replay,
        Err(DomainError::Code(CodeError::AlreadyUsed))
    ));
}

#[tokio::test]
async fn test_verify_code_without_login() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();

    let result = f.service.verify_code("a@x.com", "123456").await;
    assert!(matches!(result, Err(DomainError::Code(CodeError::NotFound))));
}

#[tokio::test]
async fn test_verify_code_unknown_email() {
    let f = fixture();

    let result = f.service.verify_code("ghost@x.com", "123456").await;
    assert!(matches!(result, Err(DomainError::Code(CodeError::NotFound))));
}

#[tokio::test]
async fn test_verify_code_mismatch() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();
    f.service.login("a@x.com", "password1").await.unwrap();

    let code = f.email.last_sent().await.unwrap().extract_code().unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };

    let result = f.service.verify_code("a@x.com", wrong).await;
    assert!(matches!(result, Err(DomainError::Code(CodeError::Mismatch))));

    // The correct code still works after a failed guess
    f.service.verify_code("a@x.com", &code).await.unwrap();
}

#[tokio::test]
async fn test_verify_code_expired() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();
    f.service.login("a@x.com", "password1").await.unwrap();

    let code = f.email.last_sent().await.unwrap().extract_code().unwrap();

    // Age the stored record past its window
    let account = f.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    let mut stored = f
        .codes
        .find_latest_for_account(account.id)
        .await
        .unwrap()
        .unwrap();
    stored.expires_at = chrono::Utc::now() - chrono::Duration::seconds(1);
    f.codes.put(stored).await;

    let result = f.service.verify_code("a@x.com", &code).await;
    assert!(matches!(result, Err(DomainError::Code(CodeError::Expired))));
}

#[tokio::test]
async fn test_second_login_supersedes_first_code() {
    let f = fixture();
    f.service.register("a@x.com", "password1").await.unwrap();

    f.service.login("a@x.com", "password1").await.unwrap();
    let first = f.email.last_sent().await.unwrap().extract_code().unwrap();

    // Make the first code strictly older so issuance order is unambiguous
    let account = f.accounts.find_by_email("a@x.com").await.unwrap().unwrap();
    let mut stored = f
        .codes
        .find_latest_for_account(account.id)
        .await
        .unwrap()
        .unwrap();
    stored.created_at = stored.created_at - chrono::Duration::seconds(30);
    f.codes.put(stored).await;

    f.service.login("a@x.com", "password1").await.unwrap();
    let second = f.email.last_sent().await.unwrap().extract_code().unwrap();

    if first != second {
        // The superseded code no longer verifies
        let result = f.service.verify_code("a@x.com", &first).await;
        assert!(matches!(result, Err(DomainError::Code(CodeError::Mismatch))));
    }

    f.service.verify_code("a@x.com", &second).await.unwrap();
    assert_eq!(f.codes.len().await, 2);
}
