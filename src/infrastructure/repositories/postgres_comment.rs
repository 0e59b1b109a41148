// src/infrastructure/repositories/postgres_comment.rs
use super::error::map_sqlx;
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, NewComment, NewReply, Reply, ReplyId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replies_for(&self, comment_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Reply>>> {
        if comment_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ReplyRow>(&format!(
            "SELECT {REPLY_COLUMNS} FROM comment_replies WHERE comment_id = ANY($1) ORDER BY id"
        ))
        .bind(comment_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<Reply>> = HashMap::new();
        for row in rows {
            let comment_id = row.comment_id;
            grouped
                .entry(comment_id)
                .or_default()
                .push(Reply::try_from(row)?);
        }
        Ok(grouped)
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    user_id: i64,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self, replies: Vec<Reply>) -> DomainResult<Comment> {
        Ok(Comment {
            id: CommentId::new(self.id)?,
            post_id: PostId::new(self.post_id)?,
            user_id: UserId::new(self.user_id)?,
            body: CommentBody::new(self.description)?,
            replies,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: i64,
    comment_id: i64,
    user_id: i64,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ReplyRow> for Reply {
    type Error = DomainError;

    fn try_from(row: ReplyRow) -> Result<Self, Self::Error> {
        Ok(Reply {
            id: ReplyId::new(row.id)?,
            comment_id: CommentId::new(row.comment_id)?,
            user_id: UserId::new(row.user_id)?,
            body: CommentBody::new(row.description)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const COMMENT_COLUMNS: &str = "id, post_id, user_id, description, created_at, updated_at";
const REPLY_COLUMNS: &str = "id, comment_id, user_id, description, created_at, updated_at";

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (post_id, user_id, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i64::from(comment.post_id))
        .bind(i64::from(comment.user_id))
        .bind(comment.body.as_str())
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.into_comment(Vec::new())
    }

    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND post_id = $2"
        ))
        .bind(i64::from(id))
        .bind(i64::from(post_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => {
                let mut replies = self.replies_for(&[row.id]).await?;
                let replies = replies.remove(&row.id).unwrap_or_default();
                Ok(Some(row.into_comment(replies)?))
            }
            None => Ok(None),
        }
    }

    async fn list_by_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = $1
             ORDER BY id LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(post_id))
        .bind(i64::from(limit))
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut replies = self.replies_for(&ids).await?;

        let comments = rows
            .into_iter()
            .map(|row| {
                let thread = replies.remove(&row.id).unwrap_or_default();
                row.into_comment(thread)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(i64::from(post_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((comments, count as u64))
    }

    async fn update_body(
        &self,
        id: CommentId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result = sqlx::query("UPDATE comments SET description = $2, updated_at = $3 WHERE id = $1")
            .bind(i64::from(id))
            .bind(body.as_str())
            .bind(updated_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(i64::from(post_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn insert_reply(&self, reply: NewReply) -> DomainResult<Reply> {
        let row = sqlx::query_as::<_, ReplyRow>(&format!(
            "INSERT INTO comment_replies (comment_id, user_id, description, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {REPLY_COLUMNS}"
        ))
        .bind(i64::from(reply.comment_id))
        .bind(i64::from(reply.user_id))
        .bind(reply.body.as_str())
        .bind(reply.created_at)
        .bind(reply.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Reply::try_from(row)
    }

    async fn update_reply(
        &self,
        id: ReplyId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE comment_replies SET description = $2, updated_at = $3 WHERE id = $1")
                .bind(i64::from(id))
                .bind(body.as_str())
                .bind(updated_at)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("reply not found".into()));
        }
        Ok(())
    }

    async fn delete_reply(&self, id: ReplyId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comment_replies WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("reply not found".into()));
        }
        Ok(())
    }
}
