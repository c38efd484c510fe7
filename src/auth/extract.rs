//! Authorization-header parsing.
//! Used by: auth::middleware.

use axum::http::{header, HeaderMap};

use crate::error::{Error, Result};

const BEARER_PREFIX: &str = "Bearer ";

/// Pulls the candidate token out of the Authorization header.
///
/// A header that is absent, unreadable, or carries any scheme other than
/// `Bearer` is treated identically: missing credential, no parse attempted.
/// A bare `Bearer ` with nothing after it is a malformed token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(Error::MissingCredential)?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(Error::MissingCredential)?;
    if token.is_empty() {
        return Err(Error::InvalidCredential);
    }
    Ok(token)
}
