use axum::{Router, middleware, routing::get};

use super::controller::list_users;
use crate::middleware::auth::require_auth;
use crate::middleware::role::{admins_only, require_roles};
use crate::state::AppState;

pub fn init_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route_layer(middleware::from_fn_with_state(admins_only(), require_roles))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
