//! Unified error types for tokengate.
//! Used by: config, token, auth, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authorization header absent or not a Bearer credential.
    #[error("Unauthorized: No token found")]
    MissingCredential,

    /// Token malformed, signature mismatch, or expired.
    #[error("Token expired or couldn't be verified!")]
    InvalidCredential,

    /// Username/password mismatch at login.
    #[error("incorrect credentials!")]
    InvalidLogin,

    #[error("signing error: {0}")]
    Signing(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Wire bodies are part of the API contract: auth rejections use an
        // "error" key, login rejections a "msg" key.
        match &self {
            Error::MissingCredential | Error::InvalidCredential => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            Error::InvalidLogin => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "msg": self.to_string() })),
            )
                .into_response(),
            Error::Signing(_) | Error::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "internal error" })))
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_returns_401() {
        let response = Error::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_credential_returns_401() {
        let response = Error::InvalidCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_login_returns_401() {
        let response = Error::InvalidLogin.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn signing_error_returns_500() {
        let response = Error::Signing("key failure".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_match_the_wire_contract() {
        assert_eq!(Error::MissingCredential.to_string(), "Unauthorized: No token found");
        assert_eq!(
            Error::InvalidCredential.to_string(),
            "Token expired or couldn't be verified!"
        );
        assert_eq!(Error::InvalidLogin.to_string(), "incorrect credentials!");
    }
}
