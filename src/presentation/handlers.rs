use crate::application::auth_service::AuthService;
use crate::application::authenticator::PasswordAuthenticator;
use crate::application::student_service::StudentService;
use crate::data::student_repository::InMemoryStudentRepository;
use crate::data::user_repository::InMemoryUserRepository;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::error::DomainError;
use actix_web::{FromRequest, HttpMessage, HttpResponse, ResponseError, http::StatusCode};
use chrono::Utc;
use serde::Serialize;
use std::pin::Pin;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

pub type AppAuthService =
    AuthService<InMemoryUserRepository, PasswordAuthenticator<InMemoryUserRepository>>;

// AppState holding the services
pub struct AppState {
    pub auth_service: AppAuthService,
    pub student_service: StudentService<InMemoryStudentRepository>,
}

// Uniform error response format
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Username is already taken")]
    DuplicateUsername,
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn client_message(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateUsername => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_msg = self.to_string();

        if status.is_server_error() {
            error!(error = %error_msg, status = %status, "Request failed");
        } else {
            warn!(error = %error_msg, status = %status, "Request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse {
            message: self.client_message(),
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::DuplicateUsername) => ApiError::DuplicateUsername,
            Some(DomainError::DuplicateEmail) => ApiError::DuplicateEmail,
            Some(DomainError::InvalidCredentials) => ApiError::InvalidCredentials,
            Some(DomainError::StudentNotFound(id)) => {
                ApiError::NotFound(format!("Student not found with id {}", id))
            }
            Some(DomainError::Validation(msg)) => ApiError::Validation(msg.clone()),
            Some(DomainError::Internal(msg)) => ApiError::Internal(msg.clone()),
            None => ApiError::Database(err.to_string()),
        }
    }
}

// AuthenticatedUser extractor, populated by JwtAuthMiddleware
impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        Box::pin(async move {
            user.ok_or_else(|| ApiError::Unauthorized("User not authenticated".to_string()))
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    info!("Health check requested");
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };
    HttpResponse::Ok().json(response)
}
