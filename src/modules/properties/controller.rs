use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rentwise_core::{AppError, ErrorBody, PaginationParams};
use rentwise_models::{
    ListingsResponse, PropertiesResponse, PropertyCreatedResponse, PropertyDetails,
    PropertyResponse,
};
use tracing::instrument;

use super::service::PropertyService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all properties with their owners
#[utoipa::path(
    get,
    path = "/api/property",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of listings", body = PropertiesResponse),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Properties"
)]
#[instrument(skip(state))]
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PropertiesResponse>, AppError> {
    let response = PropertyService::list(state.properties.as_ref(), params).await?;
    Ok(Json(response))
}

/// Get one property
#[utoipa::path(
    get,
    path = "/api/property/{id}",
    params(("id" = String, Path, description = "Property id")),
    responses(
        (status = 200, description = "The listing with its owner", body = PropertyResponse),
        (status = 404, description = "Property not found", body = ErrorBody)
    ),
    tag = "Properties"
)]
#[instrument(skip(state))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyResponse>, AppError> {
    let property = PropertyService::get(state.properties.as_ref(), &id).await?;
    Ok(Json(PropertyResponse { property }))
}

/// Publish a new listing owned by the caller
#[utoipa::path(
    post,
    path = "/api/property/create",
    request_body = PropertyDetails,
    responses(
        (status = 201, description = "Property created", body = PropertyCreatedResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 403, description = "Role may not publish listings", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Properties"
)]
#[instrument(skip(state, auth_user, details), fields(user_id = %auth_user.0.user_id))]
pub async fn create_property(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(details): ValidatedJson<PropertyDetails>,
) -> Result<(StatusCode, Json<PropertyCreatedResponse>), AppError> {
    let property =
        PropertyService::create(state.properties.as_ref(), auth_user.user_id()?, details).await?;

    Ok((
        StatusCode::CREATED,
        Json(PropertyCreatedResponse {
            message: "Property created successfully".to_string(),
            property,
        }),
    ))
}

/// Listings owned by the caller
#[utoipa::path(
    get,
    path = "/api/property/user/listings",
    responses(
        (status = 200, description = "The caller's listings", body = ListingsResponse),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Properties"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.0.user_id))]
pub async fn my_listings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ListingsResponse>, AppError> {
    let properties =
        PropertyService::listings_of(state.properties.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(ListingsResponse { properties }))
}
