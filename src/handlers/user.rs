//! Protected user endpoint.
//! Used by: server.

use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::auth::AuthUser;

#[derive(Serialize)]
pub struct UserResponse {
    pub msg: String,
    pub user_id: u64,
}

/// The auth middleware guarantees the extension is present; reaching this
/// handler without it is a routing bug.
pub async fn profile(Extension(user): Extension<AuthUser>) -> Json<UserResponse> {
    Json(UserResponse {
        msg: "Hello there!".into(),
        user_id: user.id,
    })
}
