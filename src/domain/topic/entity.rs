// src/domain/topic/entity.rs
use crate::domain::topic::value_objects::{TopicId, TopicName, TopicSlug};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Topic {
    pub id: TopicId,
    pub name: TopicName,
    pub slug: TopicSlug,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Topic {
    pub fn set_slug(&mut self, slug: TopicSlug) {
        self.slug = slug;
    }
}

/// A topic row as first inserted. The slug starts out as a unique placeholder
/// and is renamed by the slug allocator immediately after the insert.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: TopicName,
    pub slug: TopicSlug,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}
