use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use rentwise_auth::{RequestIdentity, TOKEN_COOKIE};
use rentwise_core::{AppError, ErrorBody};
use rentwise_models::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use tracing::instrument;

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Session cookie carrying the signed token, readable by the gate only.
fn session_cookie(token: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(time::Duration::seconds(max_age_seconds))
        .build()
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, session cookie set", body = AuthResponse),
        (status = 400, description = "Email already registered or malformed body", body = ErrorBody),
        (status = 403, description = "Requested role cannot be self-assigned", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AppError> {
    let (user, token) = AuthService::register(state.users.as_ref(), &state.tokens, dto).await?;
    let cookie = session_cookie(
        token.clone(),
        state.tokens.token_expiry(),
        state.secure_cookies,
    );

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user,
            token,
        }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let (user, token) = AuthService::login(state.users.as_ref(), &state.tokens, dto).await?;
    let cookie = session_cookie(
        token.clone(),
        state.tokens.token_expiry(),
        state.secure_cookies,
    );

    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            message: "Login successful".to_string(),
            user,
            token,
        }),
    ))
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie removed", body = MessageResponse)
    ),
    tag = "Authentication"
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    // Always emitted, even when the request carried no cookie.
    let mut cookie = session_cookie(String::new(), 0, state.secure_cookies);
    cookie.make_removal();

    (
        jar.add(cookie),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

/// Identity carried by the caller's credential
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current identity", body = RequestIdentity),
        (status = 401, description = "Missing or invalid credential", body = ErrorBody)
    ),
    security(
        ("cookie_auth" = []),
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(AuthUser(identity): AuthUser) -> Json<RequestIdentity> {
    Json(identity)
}
