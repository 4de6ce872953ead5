use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Username is already taken")]
    DuplicateUsername,
    #[error("Email is already registered")]
    DuplicateEmail,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Student not found: {0}")]
    StudentNotFound(u64),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
