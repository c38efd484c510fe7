//! Login credential checking.
//! Used by: handlers::login, state.

/// Maps a submitted username/password to an identity, or rejects it. Token
/// logic never sees credentials; real account storage slots in behind this
/// trait.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<u64>;
}

/// Single-user store backed by configuration.
pub struct StaticCredentials {
    username: String,
    password: String,
    user_id: u64,
}

impl StaticCredentials {
    pub fn new(username: String, password: String, user_id: u64) -> Self {
        Self {
            username,
            password,
            user_id,
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<u64> {
        if username == self.username && password == self.password {
            Some(self.user_id)
        } else {
            None
        }
    }
}
