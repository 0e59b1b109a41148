// src/infrastructure/repositories/postgres_user.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, PasswordHash, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    full_name: Option<String>,
    image: Option<String>,
    password_hash: String,
    is_active: bool,
    joined_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            full_name: row.full_name,
            image: row.image,
            password_hash: PasswordHash::new(row.password_hash)?,
            is_active: row.is_active,
            joined_at: row.joined_at,
        })
    }
}

const USER_COLUMNS: &str = "id, username, full_name, image, password_hash, is_active, joined_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            full_name,
            image,
            password_hash,
            is_active,
            joined_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (username, full_name, image, password_hash, is_active, joined_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, username, full_name, image, password_hash, is_active, joined_at",
        )
        .bind(username.as_str())
        .bind(full_name)
        .bind(image)
        .bind(password_hash.as_str())
        .bind(is_active)
        .bind(joined_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
