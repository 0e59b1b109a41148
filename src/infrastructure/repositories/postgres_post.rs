// src/infrastructure/repositories/postgres_post.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostTitle, PostUpdate,
    PostWriteRepository,
};
use crate::domain::topic::TopicId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    author_id: i64,
    title: String,
    slug: String,
    short_description: String,
    description: Option<String>,
    cover_image: Option<String>,
    publish_at: Option<DateTime<Utc>>,
    topic_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            short_description: row.short_description,
            description: row.description,
            cover_image: row.cover_image,
            publish_at: row.publish_at,
            topic_ids: row
                .topic_ids
                .into_iter()
                .map(TopicId::new)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const POST_COLUMNS: &str = "id, author_id, title, slug, short_description, description, \
     cover_image, publish_at, topic_ids, created_at, updated_at";

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            author_id,
            title,
            slug,
            short_description,
            description,
            cover_image,
            publish_at,
            topic_ids,
            created_at,
            updated_at,
        } = post;

        let raw_topic_ids: Vec<i64> = topic_ids.into_iter().map(i64::from).collect();

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (author_id, title, slug, short_description, description, \
             cover_image, publish_at, topic_ids, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(i64::from(author_id))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(short_description)
        .bind(description)
        .bind(cover_image)
        .bind(publish_at)
        .bind(&raw_topic_ids)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn set_slug(&self, id: PostId, slug: &PostSlug) -> DomainResult<()> {
        let result = sqlx::query("UPDATE posts SET slug = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            short_description,
            description,
            cover_image,
            publish_at,
            topic_ids,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(short_description) = short_description {
            builder.push(", short_description = ");
            builder.push_bind(short_description);
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }

        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }

        if let Some(publish_at) = publish_at {
            builder.push(", publish_at = ");
            builder.push_bind(publish_at);
        }

        if let Some(topic_ids) = topic_ids {
            let raw: Vec<i64> = topic_ids.into_iter().map(i64::from).collect();
            builder.push(", topic_ids = ");
            builder.push_bind(raw);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(&format!(" RETURNING {POST_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostListFilter) {
        let mut separated = false;
        let mut sep = |builder: &mut QueryBuilder<'_, Postgres>, separated: &mut bool| {
            if *separated {
                builder.push(" AND ");
            } else {
                builder.push(" WHERE ");
                *separated = true;
            }
        };

        if let Some(cutoff) = filter.visible_before {
            sep(builder, &mut separated);
            builder.push("publish_at IS NOT NULL AND publish_at < ");
            builder.push_bind(cutoff);
        }

        if let Some(title) = &filter.title {
            sep(builder, &mut separated);
            builder.push("title = ");
            builder.push_bind(title.clone());
        }

        if let Some(author_id) = filter.author_id {
            sep(builder, &mut separated);
            builder.push("author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        if let Some(topic_ids) = &filter.topic_ids {
            let raw: Vec<i64> = topic_ids.iter().copied().map(i64::from).collect();
            sep(builder, &mut separated);
            // Array overlap: an empty filter list matches nothing.
            builder.push("topic_ids && ");
            builder.push_bind(raw);
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_conditions(&mut count_builder, filter);

        let count: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((posts, count as u64))
    }
}
