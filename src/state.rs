//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::credentials::{CredentialStore, StaticCredentials};
use crate::telemetry::Metrics;
use crate::token::issue::TokenIssuer;
use crate::token::verify::TokenVerifier;

pub struct AppStateInner {
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    pub credentials: Box<dyn CredentialStore>,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: Config) -> AppState {
    Arc::new(AppStateInner {
        issuer: TokenIssuer::new(&config.secret, config.token_ttl_seconds),
        verifier: TokenVerifier::new(&config.secret),
        credentials: Box::new(StaticCredentials::new(
            config.username,
            config.password,
            config.user_id,
        )),
        metrics: Metrics::new(),
    })
}

pub fn build_test_state() -> AppState {
    build_state(Config {
        port: 0,
        secret: "test-secret".into(),
        token_ttl_seconds: 300,
        username: "kinjal".into(),
        password: "123456".into(),
        user_id: 4,
    })
}
