use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use rentwise_auth::{AuthError, RequestIdentity, TOKEN_COOKIE, authenticate};
use rentwise_core::AppError;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Verifies the request's credential and attaches the caller's identity.
///
/// The `token` cookie takes precedence over the `Authorization` header. A
/// rejected request never reaches the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = {
        let cookie = jar.get(TOKEN_COOKIE).map(|c| c.value());
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        authenticate(cookie, authorization, &state.tokens).inspect_err(|err| {
            debug!(path = %req.uri().path(), reason = %err, "Request rejected by auth gate");
        })?
    };

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// The identity attached by [`require_auth`].
///
/// Extracting it on a route without the gate yields 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestIdentity);

impl AuthUser {
    /// The user id as a UUID. Tokens carrying any other id are treated as invalid.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.user_id).map_err(|_| AuthError::InvalidCredential.into())
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::Unauthenticated)
    }
}
