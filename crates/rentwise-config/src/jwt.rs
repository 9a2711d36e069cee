use std::env;
use std::fmt;

use crate::error::ConfigError;
use crate::parse_or;

/// Credentials stay valid for seven days unless overridden.
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 60 * 60 * 24 * 7;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Loads the config through `lookup`. `JWT_SECRET` must be present and
    /// non-blank; without it no credential could be verified.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let token_expiry = parse_or(&lookup, "JWT_EXPIRY_SECONDS", DEFAULT_TOKEN_EXPIRY_SECONDS)?;
        if token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRY_SECONDS",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}
