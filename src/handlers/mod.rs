//! HTTP handler modules.
//! Used by: server.

pub mod health;
pub mod login;
pub mod metrics;
pub mod user;
