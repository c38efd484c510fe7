//! JWT claims carried by issued tokens.
//! Used by: token::issue, token::verify, auth::middleware.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Authenticated subject identifier.
    pub sub: u64,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: u64, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub,
            iat: now,
            exp: now + ttl_seconds,
        }
    }
}
