use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Body of create and update requests.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl Student {
    pub fn from_payload(id: u64, payload: StudentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            age: payload.age,
        }
    }

    /// Case-insensitive match on name or email.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}
