//! Per-request authentication and authorization failures.

use anyhow::anyhow;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rentwise_core::{AppError, ErrorBody};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Neither the `token` cookie nor a bearer header carried a credential.
    #[error("Unauthorized: No token provided")]
    MissingCredential,

    /// Bad signature, malformed payload or expired credential.
    #[error("Unauthorized: Invalid token")]
    InvalidCredential,

    /// A role check ran on a request the gate never authenticated.
    #[error("Unauthorized")]
    Unauthenticated,

    /// Authenticated, but the role is not on the allow-list.
    #[error("Forbidden: Insufficient permissions")]
    Forbidden,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential
            | AuthError::InvalidCredential
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::new(err.status(), anyhow!(err))
    }
}
