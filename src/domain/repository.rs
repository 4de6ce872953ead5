use crate::domain::student::{Student, StudentPayload};
use crate::domain::user::{NewUser, User};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: StudentPayload) -> Result<Student>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Student>>;
    async fn find_all(&self) -> Result<Vec<Student>>;
    /// Returns `false` when no student with that id exists.
    async fn update(&self, student: Student) -> Result<bool>;
    /// Returns `false` when no student with that id exists.
    async fn delete(&self, id: u64) -> Result<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and assigns its id. Fails with
    /// `DomainError::DuplicateUsername` or `DomainError::DuplicateEmail`
    /// when either is already stored.
    async fn save_user(&self, user: NewUser) -> Result<User>;
    async fn exists_by_username(&self, username: &str) -> Result<bool>;
    async fn exists_by_email(&self, email: &str) -> Result<bool>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
}
