use serde::{Deserialize, Serialize};

/// Stored row, never serialized. Clients see [`AuthResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
}

/// A user row before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by both registration and login. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl AuthResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user_id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}
