// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::{
        comment::CommentRepository,
        post::{PostReadRepository, PostWriteRepository},
        reaction::ReactionRepository,
        services::SlugAllocator,
        topic::{TopicId, TopicRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) reaction_repo: Arc<dyn ReactionRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        slug_allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            topic_repo,
            comment_repo,
            reaction_repo,
            slug_allocator,
            clock,
        }
    }

    /// Resolve topic slugs to ids, preserving request order and silently
    /// dropping slugs that match no topic.
    pub(super) async fn resolve_topic_ids(
        &self,
        slugs: &[String],
    ) -> ApplicationResult<Vec<TopicId>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let topics = self.topic_repo.find_by_slugs(slugs).await?;
        let mut ids = Vec::with_capacity(topics.len());
        for slug in slugs {
            if let Some(topic) = topics.iter().find(|topic| topic.slug.as_str() == slug) {
                if !ids.contains(&topic.id) {
                    ids.push(topic.id);
                }
            }
        }
        Ok(ids)
    }
}
