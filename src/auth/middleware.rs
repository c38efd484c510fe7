//! Request authentication: header state machine plus axum middleware.
//! Used by: server.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::extract::bearer_token;
use crate::auth::AuthUser;
use crate::error::Result;
use crate::state::AppState;
use crate::token::verify::TokenVerifier;

/// Runs the full gate over a set of request headers: extract the bearer
/// credential, verify it, recover the identity. Independent of any HTTP
/// server, so it can be exercised directly in tests.
pub fn authenticate(headers: &HeaderMap, verifier: &TokenVerifier) -> Result<AuthUser> {
    let token = bearer_token(headers)?;
    let claims = verifier.verify(token)?;
    Ok(AuthUser { id: claims.sub })
}

/// Axum wrapper around [`authenticate`]: on success the `AuthUser` is
/// inserted into request extensions for downstream handlers; on failure the
/// rejection converts to a 401 response.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    match authenticate(req.headers(), &state.verifier) {
        Ok(user) => {
            state.metrics.record_verify();
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(err) => {
            tracing::warn!(%err, "request rejected");
            state.metrics.record_reject();
            Err(err)
        }
    }
}
