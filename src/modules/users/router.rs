use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::controller::{change_password, get_profile, update_profile, update_settings};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/password", put(change_password))
        .route("/settings", put(update_settings))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
