//! HS256 token issuance.
//! Used by: handlers::login.

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::token::claims::Claims;

/// Signs `{sub, iat, exp}` claims with the process-wide secret. Pure apart
/// from reading the clock; the caller is responsible for having verified
/// the identity it passes in.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    pub fn issue(&self, identity: u64) -> Result<String> {
        let claims = Claims::new(identity, self.ttl_seconds);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Signing(e.to_string()))
    }
}
