//! Login endpoint: credential check and token issuance.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let identity = match state.credentials.verify(&req.username, &req.password) {
        Some(id) => id,
        None => {
            tracing::warn!(username = %req.username, "login rejected");
            state.metrics.record_login_reject();
            return Err(Error::InvalidLogin);
        }
    };
    let token = state.issuer.issue(identity)?;
    tracing::info!(user_id = identity, "token issued");
    state.metrics.record_issue();
    Ok(Json(LoginResponse { token }))
}
