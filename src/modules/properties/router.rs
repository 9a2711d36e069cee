use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::controller::{create_property, get_property, list_properties, my_listings};
use crate::middleware::auth::require_auth;
use crate::middleware::role::{listing_publishers, require_roles};
use crate::state::AppState;

pub fn init_properties_router(state: AppState) -> Router<AppState> {
    let publish = Router::new()
        .route("/create", post(create_property))
        .route_layer(middleware::from_fn_with_state(
            listing_publishers(),
            require_roles,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let mine = Router::new()
        .route("/user/listings", get(my_listings))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/", get(list_properties))
        .route("/{id}", get(get_property))
        .merge(publish)
        .merge(mine)
}
