//! HMAC keys for signing and verifying credentials.
//!
//! Keys are derived once from [`JwtConfig`] at startup and shared read-only
//! (behind an `Arc`) by every request; verification is a pure function of
//! the token, the keys and the current time.

use std::fmt;

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rentwise_config::JwtConfig;
use rentwise_core::AppError;
use tracing::debug;

use crate::claims::Claims;
use crate::error::AuthError;
use crate::role::Role;

#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    token_expiry: i64,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a credential is dead the second `exp` passes.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            token_expiry: config.token_expiry,
        }
    }

    /// Lifetime of issued credentials, in seconds.
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Mints a credential for `user_id` valid from now for the configured lifetime.
    pub fn issue(&self, user_id: &str, email: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp: now + self.token_expiry as usize,
        };

        self.sign(&claims)
    }

    /// Signs an arbitrary payload. Callers normally want [`TokenKeys::issue`].
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
    }

    /// Checks signature and expiry and decodes the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "Credential rejected");
                AuthError::InvalidCredential
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::new(&JwtConfig::new("test-secret-key-at-least-32-characters-long"))
    }

    fn now() -> usize {
        Utc::now().timestamp() as usize
    }

    #[test]
    fn test_issue_and_verify() {
        let keys = test_keys();
        let token = keys.issue("user-1", "renter@example.com", Role::Renter).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.email, "renter@example.com");
        assert_eq!(claims.role, Role::Renter);
        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = test_keys()
            .issue("user-1", "renter@example.com", Role::Renter)
            .unwrap();

        let other = TokenKeys::new(&JwtConfig::new("a-completely-different-secret-value"));
        assert_eq!(other.verify(&token), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = test_keys();
        let claims = Claims {
            user_id: "user-1".to_string(),
            email: "renter@example.com".to_string(),
            role: Role::Renter,
            iat: now() - 7200,
            exp: now() - 5,
        };
        let token = keys.sign(&claims).unwrap();

        assert_eq!(keys.verify(&token), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let keys = test_keys();
        let token = keys.issue("user-1", "renter@example.com", Role::Renter).unwrap();

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let forged = keys.issue("user-1", "renter@example.com", Role::Admin).unwrap();
        parts[1] = forged.split('.').nth(1).unwrap().to_string();
        let tampered = parts.join(".");

        assert_eq!(keys.verify(&tampered), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn test_garbage_rejected() {
        let keys = test_keys();
        assert_eq!(keys.verify("not.a.token"), Err(AuthError::InvalidCredential));
        assert_eq!(keys.verify(""), Err(AuthError::InvalidCredential));
    }

    #[test]
    fn test_verification_is_repeatable() {
        let keys = test_keys();
        let token = keys.issue("user-9", "owner@example.com", Role::Owner).unwrap();
        assert_eq!(keys.verify(&token).unwrap(), keys.verify(&token).unwrap());
    }

    #[test]
    fn test_custom_expiry_is_applied() {
        let mut config = JwtConfig::new("test-secret-key-at-least-32-characters-long");
        config.token_expiry = 60;
        let keys = TokenKeys::new(&config);

        let token = keys.issue("u", "u@example.com", Role::Broker).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 60);
        assert_eq!(keys.token_expiry(), 60);
    }
}
