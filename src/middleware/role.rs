//! Role-based authorization middleware.
//!
//! Must run after [`super::auth::require_auth`]; without an identity in the
//! request extensions every request is answered with 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use rentwise_auth::{AuthError, RequestIdentity, Role, RoleGuard, with_roles};
use tracing::debug;

/// Lets the request through only if the caller's role is in the guard's list.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/users", get(list_users))
///     .route_layer(middleware::from_fn_with_state(with_roles([Role::Admin]), require_roles))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_roles(
    State(guard): State<RoleGuard>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = req.extensions().get::<RequestIdentity>();

    guard.check(identity).inspect_err(|err| {
        debug!(
            path = %req.uri().path(),
            role = ?identity.map(|i| i.role),
            allowed = ?guard.allowed(),
            reason = %err,
            "Request rejected by role guard"
        );
    })?;

    Ok(next.run(req).await)
}

/// Roles that may publish listings.
pub fn listing_publishers() -> RoleGuard {
    with_roles([Role::Owner, Role::Broker, Role::Admin])
}

pub fn admins_only() -> RoleGuard {
    with_roles([Role::Admin])
}
