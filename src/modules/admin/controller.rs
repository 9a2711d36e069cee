use axum::{Json, extract::State};
use rentwise_core::{AppError, ErrorBody};
use rentwise_models::UsersResponse;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// List every account (admin only)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All users", body = UsersResponse),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody),
        (status = 403, description = "Caller is not an admin", body = ErrorBody)
    ),
    security(("cookie_auth" = []), ("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, auth_user), fields(admin = %auth_user.email()))]
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UsersResponse>, AppError> {
    let users = UserService::list_users(state.users.as_ref()).await?;
    Ok(Json(UsersResponse { users }))
}
