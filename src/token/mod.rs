//! Signed-token claims, issuance, and verification.
//! Used by: handlers, auth, state.

pub mod claims;
pub mod issue;
pub mod verify;
