pub mod auth_service;
pub mod authenticator;
pub mod student_service;
