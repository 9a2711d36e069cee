//! Locating and verifying the credential on an incoming request.
//!
//! The cookie wins over the header. The header form is
//! `Authorization: <scheme> <token>`; the token is everything after the
//! first space. An empty cookie or an empty remainder counts as absent.

use crate::error::AuthError;
use crate::identity::RequestIdentity;
use crate::keys::TokenKeys;

/// Name of the cookie carrying the credential.
pub const TOKEN_COOKIE: &str = "token";

pub fn extract_token<'a>(
    cookie: Option<&'a str>,
    authorization: Option<&'a str>,
) -> Result<&'a str, AuthError> {
    if let Some(token) = cookie.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    authorization
        .and_then(|header| header.split_once(' '))
        .map(|(_, rest)| rest.trim())
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingCredential)
}

/// Runs the whole gate: extract, verify, build the identity.
pub fn authenticate(
    cookie: Option<&str>,
    authorization: Option<&str>,
    keys: &TokenKeys,
) -> Result<RequestIdentity, AuthError> {
    let token = extract_token(cookie, authorization)?;
    let claims = keys.verify(token)?;
    Ok(RequestIdentity::from(claims))
}
