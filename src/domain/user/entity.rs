// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

/// Console account. Only admins and editors exist; readers are anonymous.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    /// Disabled accounts keep their posts but cannot sign in.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role,
            is_active: true,
            created_at,
        }
    }

    pub fn admin(username: Username, password_hash: PasswordHash, created_at: DateTime<Utc>) -> Self {
        Self::new(username, password_hash, Role::Admin, created_at)
    }
}
