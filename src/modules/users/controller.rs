use axum::{Json, extract::State};
use rentwise_core::{AppError, ErrorBody};
use rentwise_models::{
    ChangePasswordDto, MessageResponse, UpdateProfileDto, UpdateSettingsDto, UserResponse,
    UserUpdatedResponse,
};
use tracing::instrument;

use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/user/profile",
    responses(
        (status = 200, description = "Profile of the authenticated user", body = UserResponse),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "User"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.0.user_id))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::get_profile(state.users.as_ref(), auth_user.user_id()?).await?;
    Ok(Json(UserResponse { user }))
}

/// Update name, email, phone or bio
#[utoipa::path(
    put,
    path = "/api/user/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserUpdatedResponse),
        (status = 400, description = "Email already in use", body = ErrorBody),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "User"
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = %auth_user.0.user_id))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<UserUpdatedResponse>, AppError> {
    let user =
        UserService::update_profile(state.users.as_ref(), auth_user.user_id()?, dto).await?;
    Ok(Json(UserUpdatedResponse {
        message: "Profile updated successfully".to_string(),
        user,
    }))
}

/// Change the caller's password
#[utoipa::path(
    put,
    path = "/api/user/password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Current password is incorrect", body = ErrorBody),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "User"
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = %auth_user.0.user_id))]
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::change_password(state.users.as_ref(), auth_user.user_id()?, dto).await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}

/// Update notification and privacy settings
#[utoipa::path(
    put,
    path = "/api/user/settings",
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = UserUpdatedResponse),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "User"
)]
#[instrument(skip(state, auth_user, dto), fields(user_id = %auth_user.0.user_id))]
pub async fn update_settings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateSettingsDto>,
) -> Result<Json<UserUpdatedResponse>, AppError> {
    let user =
        UserService::update_settings(state.users.as_ref(), auth_user.user_id()?, dto).await?;
    Ok(Json(UserUpdatedResponse {
        message: "Settings updated successfully".to_string(),
        user,
    }))
}
