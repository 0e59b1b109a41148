// src/application/commands/topics/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{services::SlugAllocator, topic::TopicRepository},
};

pub struct TopicCommandService {
    pub(super) topic_repo: Arc<dyn TopicRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TopicCommandService {
    pub fn new(
        topic_repo: Arc<dyn TopicRepository>,
        slug_allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            topic_repo,
            slug_allocator,
            clock,
        }
    }
}
