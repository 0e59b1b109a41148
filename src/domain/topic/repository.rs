use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{NewTopic, Topic};
use crate::domain::topic::value_objects::{TopicId, TopicName, TopicSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;

    /// Atomically rename the topic's slug. Fails with `DomainError::Conflict`
    /// when the candidate collides with the unique slug index.
    async fn set_slug(&self, id: TopicId, slug: &TopicSlug) -> DomainResult<()>;

    async fn delete(&self, id: TopicId) -> DomainResult<()>;

    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>>;

    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<Topic>>;

    async fn find_by_ids(&self, ids: &[TopicId]) -> DomainResult<Vec<Topic>>;

    /// Offset/limit listing with an optional case-insensitive substring match
    /// on the name. Returns the page and the total matching count.
    async fn list(
        &self,
        name_contains: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Topic>, u64)>;
}
