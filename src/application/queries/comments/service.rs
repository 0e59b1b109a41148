// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::domain::{
    comment::CommentRepository, post::PostReadRepository, user::UserRepository,
};

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            user_repo,
        }
    }
}
