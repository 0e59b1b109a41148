// src/domain/user/entity.rs
use crate::domain::user::value_objects::{PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub password_hash: PasswordHash,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        full_name: Option<String>,
        password_hash: PasswordHash,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            full_name,
            image: None,
            password_hash,
            is_active: true,
            joined_at,
        }
    }
}
