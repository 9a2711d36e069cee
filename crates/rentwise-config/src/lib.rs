//! # Rentwise Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: signing secret and credential lifetime (the secret is mandatory)
//! - [`cors`]: allowed browser origins
//! - [`server`]: bind address, deployment environment, store backend
//! - [`database`]: PostgreSQL connection settings
//!
//! Every config exposes `from_env()` plus a `from_source()` variant that
//! takes a lookup function, so tests never touch the process environment.
//!
//! ```ignore
//! use rentwise_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?; // fails when JWT_SECRET is unset
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use server::{AppEnv, ServerConfig, StoreBackend};

/// Reads an optional variable and parses it, falling back to `default`
/// only when the variable is absent. A present but unparsable value is
/// [`ConfigError::Invalid`].
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e| ConfigError::Invalid {
            name: key,
            reason: format!("'{}' ({})", value.trim(), e),
        }),
        None => Ok(default),
    }
}
