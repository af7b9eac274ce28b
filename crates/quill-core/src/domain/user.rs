use chrono::{DateTime, Utc};

use super::Lifecycle;

/// User entity - an account that can log in, and author posts when it is an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub lifecycle: Lifecycle,
}

impl User {
    /// Roles carried in issued tokens.
    pub fn roles(&self) -> Vec<String> {
        let role = if self.is_admin { "admin" } else { "user" };
        vec![role.to_string()]
    }
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}
