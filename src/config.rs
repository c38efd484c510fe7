//! Startup configuration loaded from environment variables.
//! Used by: main, state.

use std::env;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Symmetric signing secret shared by issuer and verifier.
    pub secret: String,
    pub token_ttl_seconds: i64,
    pub username: String,
    pub password: String,
    pub user_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: parse_or(env::var("PORT").ok(), DEFAULT_PORT, "PORT")?,
            secret: require("AUTH_SECRET")?,
            token_ttl_seconds: parse_or(
                env::var("TOKEN_TTL_SECONDS").ok(),
                DEFAULT_TOKEN_TTL_SECONDS,
                "TOKEN_TTL_SECONDS",
            )?,
            username: require("AUTH_USERNAME")?,
            password: require("AUTH_PASSWORD")?,
            user_id: parse_required(&require("AUTH_USER_ID")?, "AUTH_USER_ID")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T, name: &str) -> Result<T> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{name} is not a valid value: {raw}"))),
        None => Ok(default),
    }
}

fn parse_required<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::Config(format!("{name} is not a valid value: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_default_applies_when_unset() {
        let port: u16 = parse_or(None, DEFAULT_PORT, "PORT").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn port_parses_when_set() {
        let port: u16 = parse_or(Some("3000".into()), DEFAULT_PORT, "PORT").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn malformed_port_is_a_config_error() {
        let result: Result<u16> = parse_or(Some("not-a-port".into()), DEFAULT_PORT, "PORT");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn user_id_parses() {
        let id: u64 = parse_required("4", "AUTH_USER_ID").unwrap();
        assert_eq!(id, 4);
    }
}
