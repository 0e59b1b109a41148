use crate::domain::comment::entity::{Comment, NewComment, NewReply, Reply};
use crate::domain::comment::value_objects::{CommentBody, CommentId, ReplyId};
use crate::domain::errors::DomainResult;
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Look up a comment under a specific post, replies included.
    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> DomainResult<Option<Comment>>;

    /// Comments for a post in insertion order, plus the total count.
    async fn list_by_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Comment>, u64)>;

    async fn update_body(
        &self,
        id: CommentId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;

    async fn delete(&self, id: CommentId) -> DomainResult<()>;

    /// Remove every comment (and nested reply) under a post. Returns the
    /// number of comments removed.
    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64>;

    async fn insert_reply(&self, reply: NewReply) -> DomainResult<Reply>;

    async fn update_reply(
        &self,
        id: ReplyId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;

    async fn delete_reply(&self, id: ReplyId) -> DomainResult<()>;
}
