use crate::domain::auth::{AuthenticationError, Authenticator};
use crate::domain::repository::UserRepository;
use crate::domain::user::User;
use crate::infrastructure::security::verify_password;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{instrument, trace};

/// Checks a password against the Argon2 hash stored for the username.
pub struct PasswordAuthenticator<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> PasswordAuthenticator<R> {
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository> Authenticator for PasswordAuthenticator<R> {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AuthenticationError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await
            .map_err(AuthenticationError::Store)?
            .ok_or(AuthenticationError::BadCredentials)?;

        let is_valid = verify_password(password, &user.password_hash)
            .map_err(|e| AuthenticationError::Hashing(e.to_string()))?;

        if !is_valid {
            return Err(AuthenticationError::BadCredentials);
        }

        trace!(user_id = user.id, "Credentials verified");
        Ok(user)
    }
}
