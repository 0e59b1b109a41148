use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Per-user like on a post. The (post, user) pair is unique, so reacting is
/// idempotent at the storage layer.
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Record the user's reaction. Returns `false` when it already existed.
    async fn add(
        &self,
        post_id: PostId,
        user_id: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<bool>;

    /// Withdraw the user's reaction. Returns `false` when there was none.
    async fn remove(&self, post_id: PostId, user_id: UserId) -> DomainResult<bool>;

    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64>;

    /// Remove every reaction under a post. Returns the number removed.
    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64>;
}
