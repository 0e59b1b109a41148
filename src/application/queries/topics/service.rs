// src/application/queries/topics/service.rs
use std::sync::Arc;

use crate::domain::topic::TopicRepository;

pub struct TopicQueryService {
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl TopicQueryService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repo }
    }
}
