//! # Rentwise Core
//!
//! Foundational types shared by every Rentwise crate:
//!
//! - [`errors`]: the HTTP-facing [`AppError`] and its JSON body
//! - [`pagination`]: query parameters and response metadata for list endpoints
//! - [`password`]: bcrypt hashing and verification
//!
//! ```ignore
//! use rentwise_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("correct horse battery")?;
//! if !verify_password("correct horse battery", &hash)? {
//!     return Err(AppError::unauthorized(anyhow::anyhow!("Invalid credentials")));
//! }
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

pub use errors::{AppError, ErrorBody};
pub use pagination::{PaginationMeta, PaginationParams};
pub use password::{hash_password, verify_password};
