//! HS256 token verification.
//! Used by: auth.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::{Error, Result};
use crate::token::claims::Claims;

/// Clock-skew tolerance when checking the expiry claim.
const LEEWAY_SECONDS: u64 = 30;

/// Recomputes the signature over a received token's claims and checks the
/// expiry. Algorithm is pinned to HS256; tokens signed any other way fail.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECONDS;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// All failure modes (malformed structure, signature mismatch, expiry)
    /// collapse to one rejection so the response leaks nothing about which
    /// check failed.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| Error::InvalidCredential)
    }
}
