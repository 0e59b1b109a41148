use crate::domain::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub image: Option<String>,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            full_name: user.full_name,
            image: user.image,
            is_active: user.is_active,
            joined_at: user.joined_at,
        }
    }
}

/// The subset of a user shown to other readers, e.g. as a post's author.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicUserDto {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub image: Option<String>,
}

impl From<User> for PublicUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            full_name: user.full_name,
            image: user.image,
        }
    }
}
