// src/infrastructure/repositories/postgres_topic.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{NewTopic, Topic, TopicId, TopicName, TopicRepository, TopicSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTopicRepository {
    pool: PgPool,
}

impl PostgresTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    id: i64,
    name: String,
    slug: String,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<TopicRow> for Topic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Topic {
            id: TopicId::new(row.id)?,
            name: TopicName::new(row.name)?,
            slug: TopicSlug::new(row.slug)?,
            user_id: row.user_id.map(UserId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

const TOPIC_COLUMNS: &str = "id, name, slug, user_id, created_at";

/// Substring pattern for ILIKE with the needle's `%`, `_` and `\` escaped, so
/// user input always matches literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{escaped}%")
}

#[async_trait]
impl TopicRepository for PostgresTopicRepository {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let NewTopic {
            name,
            slug,
            user_id,
            created_at,
        } = topic;

        let row = sqlx::query_as::<_, TopicRow>(
            "INSERT INTO topics (name, slug, user_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, slug, user_id, created_at",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(user_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Topic::try_from(row)
    }

    async fn set_slug(&self, id: TopicId, slug: &TopicSlug) -> DomainResult<()> {
        let result = sqlx::query("UPDATE topics SET slug = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("topic not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: TopicId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("topic not found".into()));
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE name = $1"
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }

    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<Topic>> {
        let rows = sqlx::query_as::<_, TopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE slug = ANY($1)"
        ))
        .bind(slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    async fn find_by_ids(&self, ids: &[TopicId]) -> DomainResult<Vec<Topic>> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, TopicRow>(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ANY($1)"
        ))
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    async fn list(
        &self,
        name_contains: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Topic>, u64)> {
        let pattern = name_contains.map(like_pattern);

        let rows = match &pattern {
            Some(pattern) => {
                sqlx::query_as::<_, TopicRow>(&format!(
                    "SELECT {TOPIC_COLUMNS} FROM topics WHERE name ILIKE $1
                     ORDER BY name ASC LIMIT $2 OFFSET $3"
                ))
                .bind(pattern)
                .bind(i64::from(limit))
                .bind(offset as i64)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TopicRow>(&format!(
                    "SELECT {TOPIC_COLUMNS} FROM topics ORDER BY name ASC LIMIT $1 OFFSET $2"
                ))
                .bind(i64::from(limit))
                .bind(offset as i64)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        let count: i64 = match &pattern {
            Some(pattern) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM topics WHERE name ILIKE $1")
                    .bind(pattern)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM topics")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        let topics = rows
            .into_iter()
            .map(Topic::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((topics, count as u64))
    }
}
