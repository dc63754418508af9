//! User entity as stored in the `users` table.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` is a PHC-format argon2 string. Accounts without one
/// (invited, migrated, or deliberately locked) exist but can never log in
/// with a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: String,
        username: String,
        password_hash: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
        }
    }

    /// Returns true if the account has a stored password hash.
    pub fn has_password(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|h| !h.is_empty())
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub username: String,
    pub password_hash: Option<String>,
}
