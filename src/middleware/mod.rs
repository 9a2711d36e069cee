//! Middleware and extractors for authentication and authorization.
//!
//! - [`auth`]: the gate (`require_auth`) and the [`auth::AuthUser`] extractor
//! - [`role`]: role allow-list middleware composed after the gate
//!
//! # Flow
//!
//! 1. `require_auth` reads the `token` cookie, falling back to
//!    `Authorization: Bearer <token>`, and verifies it
//! 2. On success the [`rentwise_auth::RequestIdentity`] is stored in the
//!    request extensions; on failure the request ends with 401
//! 3. `require_roles` (optional) checks the identity's role against a
//!    [`rentwise_auth::RoleGuard`] and answers 403 on mismatch
//! 4. Handlers take [`auth::AuthUser`] to read the identity
//!
//! ```ignore
//! Router::new()
//!     .route("/create", post(create_property))
//!     .route_layer(middleware::from_fn_with_state(
//!         with_roles([Role::Owner, Role::Broker, Role::Admin]),
//!         require_roles,
//!     ))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```
//!
//! Layers added later run first, so the gate is added after the role check.

pub mod auth;
pub mod role;
