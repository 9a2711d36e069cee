use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{login, logout, me, register};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn init_auth_router(state: AppState) -> Router<AppState> {
    let session = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .merge(session)
}
