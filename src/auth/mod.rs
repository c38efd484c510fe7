//! Bearer-credential extraction and authentication middleware.
//! Used by: server, handlers::user.

pub mod extract;
pub mod middleware;

/// Authenticated subject attached to request extensions after a token
/// verifies.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: u64,
}
