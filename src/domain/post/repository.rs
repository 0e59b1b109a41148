use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use crate::domain::topic::TopicId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filters applied to the post listing. `visible_before` is the publish-time
/// cutoff: only posts with `publish_at` set and strictly before it match.
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub visible_before: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub author_id: Option<UserId>,
    pub topic_ids: Option<Vec<TopicId>>,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    /// Atomically rename the post's slug. Fails with `DomainError::Conflict`
    /// when the candidate collides with the unique slug index.
    async fn set_slug(&self, id: PostId, slug: &PostSlug) -> DomainResult<()>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;

    /// Offset/limit page, newest first, plus the total matching count.
    async fn list(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
