// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{post::PostReadRepository, topic::TopicRepository, user::UserRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            topic_repo,
            user_repo,
            clock,
        }
    }
}
