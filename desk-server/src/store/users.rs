//! User Repository

use super::{StoreError, StoreResult, Table};
use chrono::{DateTime, Utc};
use shared::auth::UserInfo;

/// Stored user account. Never serialised; [`User::info`] is the wire shape.
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public identity, without the password hash
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Account data for a new user, password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Default)]
pub struct UserRepository {
    table: Table<User>,
}

impl UserRepository {
    pub fn find_by_id(&self, id: u64) -> Option<User> {
        self.table.get(id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.table.find(|u| u.username == username)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.table.find(|u| u.email == email)
    }

    /// Create a user; username is checked before email
    pub fn create(&self, data: NewUser) -> StoreResult<User> {
        let user = self.table.try_insert_with(|id, rows| {
            if rows.values().any(|u| u.username == data.username) {
                return Err(StoreError::UsernameTaken(data.username.clone()));
            }
            if rows.values().any(|u| u.email == data.email) {
                return Err(StoreError::EmailTaken(data.email.clone()));
            }
            Ok(User {
                id,
                username: data.username,
                email: data.email,
                name: data.name,
                password_hash: data.password_hash,
                created_at: Utc::now(),
            })
        })?;
        tracing::debug!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }
}
