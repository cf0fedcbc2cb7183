//! Session token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// The signing secret comes from configuration established once at
    /// startup; the service holds only derived keys afterwards.
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mints a signed session token for an authenticated account
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account's UUID
    /// * `email` - The authenticated email address
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Encoded JWT asserting identity and a 2-hour expiry
    /// * `Err(DomainError::Token(TokenError::GenerationFailed))` - Signing failed
    pub fn issue_session_token(&self, account_id: Uuid, email: &str) -> DomainResult<String> {
        let mut claims = Claims::new_session_token(account_id, email.to_string());
        claims.iss = self.config.issuer.clone();
        claims.exp = claims.iat + self.config.session_token_expiry;

        let token = self.encode_jwt(&claims)?;

        tracing::info!(
            account_id = %account_id,
            jti = %claims.jti,
            expires_at = claims.exp,
            event = "session_token_issued",
            "Issued session token"
        );

        Ok(token)
    }

    /// Verifies a session token and returns its claims
    ///
    /// Rejects any tampering: a single flipped bit in payload or signature
    /// fails signature validation. Expired tokens and wrong issuers fail
    /// with their own error kinds.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if the token is genuine and current
    /// * `Err(DomainError::Token(_))` - Expired, tampered, or malformed
    pub fn verify_session_token(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::Expired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Session token lifetime in seconds
    pub fn session_token_expiry(&self) -> i64 {
        self.config.session_token_expiry
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }
}
