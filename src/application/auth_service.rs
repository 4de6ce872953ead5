use crate::domain::auth::{AuthenticationError, Authenticator};
use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
use crate::infrastructure::security::{JwtIssuer, hash_password};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, trace, warn};

pub struct AuthService<R: UserRepository, A: Authenticator> {
    user_repository: Arc<R>,
    authenticator: A,
    token_issuer: JwtIssuer,
}

impl<R: UserRepository, A: Authenticator> AuthService<R, A> {
    pub fn new(user_repository: Arc<R>, authenticator: A, token_issuer: JwtIssuer) -> Self {
        Self {
            user_repository,
            authenticator,
            token_issuer,
        }
    }

    pub fn token_issuer(&self) -> &JwtIssuer {
        &self.token_issuer
    }

    #[instrument(skip(self, req), fields(username = %req.username, email = %req.email))]
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse> {
        trace!("Starting user registration");

        for (field, value) in [
            ("username", &req.username),
            ("email", &req.email),
            ("password", &req.password),
        ] {
            if value.trim().is_empty() {
                warn!(field = field, "Registration field is blank");
                return Err(DomainError::Validation(format!("{} is required", field)).into());
            }
        }

        if self
            .user_repository
            .exists_by_username(&req.username)
            .await?
        {
            warn!(username = %req.username, "Username already taken");
            return Err(DomainError::DuplicateUsername.into());
        }

        if self.user_repository.exists_by_email(&req.email).await? {
            warn!(email = %req.email, "Email already registered");
            return Err(DomainError::DuplicateEmail.into());
        }

        let password_hash = hash_password(&req.password).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            DomainError::Internal(format!("Failed to hash password: {}", e))
        })?;

        let new_user = NewUser {
            username: req.username,
            email: req.email,
            password_hash,
            full_name: req.full_name,
        };

        debug!("Saving user to repository");
        let user = self.user_repository.save_user(new_user).await?;

        let response = self.issue(user)?;
        info!(
            user_id = response.user_id,
            username = %response.username,
            "User registered successfully"
        );
        Ok(response)
    }

    /// Every failure cause yields `DomainError::InvalidCredentials`; the
    /// cause itself is only logged.
    #[instrument(skip(self, req), fields(username = %req.username))]
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        trace!("Starting login");

        let user = match self
            .authenticator
            .authenticate(&req.username, &req.password)
            .await
        {
            Ok(user) => user,
            Err(AuthenticationError::BadCredentials) => {
                warn!(username = %req.username, "Rejected credentials");
                return Err(DomainError::InvalidCredentials.into());
            }
            Err(e) => {
                error!(username = %req.username, error = %e, "Authentication could not complete");
                return Err(DomainError::InvalidCredentials.into());
            }
        };

        let response = self.issue(user).map_err(|e| {
            error!(error = %e, "Token issuance failed during login");
            DomainError::InvalidCredentials
        })?;

        info!(
            user_id = response.user_id,
            username = %response.username,
            "Login successful"
        );
        Ok(response)
    }

    fn issue(&self, user: User) -> Result<AuthResponse, DomainError> {
        let token = self
            .token_issuer
            .generate_token(&user.username)
            .map_err(|e| {
                error!(error = %e, "Failed to generate token");
                DomainError::Internal(format!("Failed to generate token: {}", e))
            })?;
        Ok(AuthResponse::new(token, user))
    }
}
