pub mod auth;
pub mod error;
pub mod repository;
pub mod student;
pub mod user;
