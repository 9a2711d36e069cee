//! # Rentwise Auth
//!
//! The authentication and authorization contract of the Rentwise API.
//!
//! - [`claims`]: the signed credential payload (`userId`, `email`, `role`, `iat`, `exp`)
//! - [`role`]: the closed set of marketplace roles
//! - [`keys`]: HMAC signing/verification keys built once from [`rentwise_config::JwtConfig`]
//! - [`gate`]: token extraction (cookie first, then bearer header) and verification
//! - [`guard`]: role allow-list checks composed after the gate
//! - [`identity`]: the per-request identity handed to downstream handlers
//! - [`error`]: the closed taxonomy of per-request auth failures
//!
//! Everything here is synchronous and side-effect free apart from the
//! signature computation itself; the HTTP wiring lives in the server crate.
//!
//! ```ignore
//! use rentwise_auth::{Role, TokenKeys, authenticate, with_roles};
//!
//! let keys = TokenKeys::new(&jwt_config);
//! let token = keys.issue("6650f1c2", "ada@example.com", Role::Owner)?;
//!
//! let identity = authenticate(Some(&token), None, &keys)?;
//! with_roles([Role::Owner, Role::Broker]).check(Some(&identity))?;
//! ```

pub mod claims;
pub mod error;
pub mod gate;
pub mod guard;
pub mod identity;
pub mod keys;
pub mod role;

pub use claims::Claims;
pub use error::AuthError;
pub use gate::{TOKEN_COOKIE, authenticate, extract_token};
pub use guard::{RoleGuard, with_roles};
pub use identity::RequestIdentity;
pub use keys::TokenKeys;
pub use role::Role;
