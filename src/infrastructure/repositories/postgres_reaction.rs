// src/infrastructure/repositories/postgres_reaction.rs
use super::error::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use crate::domain::reaction::ReactionRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresReactionRepository {
    pool: PgPool,
}

impl PostgresReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PostgresReactionRepository {
    async fn add(
        &self,
        post_id: PostId,
        user_id: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO reactions (post_id, user_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (post_id, user_id) DO NOTHING",
        )
        .bind(i64::from(post_id))
        .bind(i64::from(user_id))
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, post_id: PostId, user_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM reactions WHERE post_id = $1 AND user_id = $2")
            .bind(i64::from(post_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reactions WHERE post_id = $1")
            .bind(i64::from(post_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(count as u64)
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM reactions WHERE post_id = $1")
            .bind(i64::from(post_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
