use crate::domain::user::User;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthenticationError {
    #[error("Bad credentials")]
    BadCredentials,
    #[error("Credential store unavailable: {0}")]
    Store(anyhow::Error),
    #[error("Password verification failed: {0}")]
    Hashing(String),
}

/// Verifies a username/password pair and yields the authenticated principal.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AuthenticationError>;
}

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}
