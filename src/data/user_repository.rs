use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::{NewUser, User};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace, warn};

#[derive(Default)]
struct UserTable {
    rows: HashMap<u64, User>,
    last_id: u64,
}

#[derive(Clone)]
pub struct InMemoryUserRepository {
    storage: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(UserTable::default())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username, email = %user.email))]
    async fn save_user(&self, user: NewUser) -> Result<User> {
        trace!("Acquiring write lock for user storage");
        let mut storage = self.storage.write().await;

        // Uniqueness is re-checked under the write lock so concurrent
        // registrations cannot both insert.
        if storage.rows.values().any(|u| u.username == user.username) {
            warn!(username = %user.username, "Username taken at insert time");
            return Err(DomainError::DuplicateUsername.into());
        }
        if storage.rows.values().any(|u| u.email == user.email) {
            warn!(email = %user.email, "Email taken at insert time");
            return Err(DomainError::DuplicateEmail.into());
        }

        storage.last_id += 1;
        let saved = User {
            id: storage.last_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            full_name: user.full_name,
        };
        storage.rows.insert(saved.id, saved.clone());
        debug!(
            user_id = saved.id,
            username = %saved.username,
            "User saved to memory storage"
        );
        Ok(saved)
    }

    #[instrument(skip(self))]
    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let storage = self.storage.read().await;
        Ok(storage.rows.values().any(|u| u.username == username))
    }

    #[instrument(skip(self))]
    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let storage = self.storage.read().await;
        Ok(storage.rows.values().any(|u| u.email == email))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        trace!("Acquiring read lock for user storage");
        let storage = self.storage.read().await;
        let user = storage
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned();
        match &user {
            Some(u) => debug!(user_id = u.id, username = %u.username, "User found in storage"),
            None => trace!(username = username, "User not found in storage"),
        }
        Ok(user)
    }
}
