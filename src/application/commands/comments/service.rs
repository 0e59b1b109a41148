// src/application/commands/comments/service.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        dto::PublicUserDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        post::{Post, PostReadRepository, PostSlug},
        user::{UserId, UserRepository},
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn resolve_post(&self, slug: &str) -> ApplicationResult<Post> {
        let slug = PostSlug::new(slug)?;
        self.post_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub(super) async fn resolve_comment(
        &self,
        post_slug: &str,
        comment_id: i64,
    ) -> ApplicationResult<Comment> {
        let post = self.resolve_post(post_slug).await?;
        let id = CommentId::new(comment_id)?;
        self.comment_repo
            .find_by_id(post.id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }

    /// Everyone who wrote the comment or a reply under it.
    pub(super) fn participant_ids(comment: &Comment) -> Vec<UserId> {
        let mut ids = vec![comment.user_id];
        for reply in &comment.replies {
            if !ids.contains(&reply.user_id) {
                ids.push(reply.user_id);
            }
        }
        ids
    }

    /// Profile map for DTO assembly, keyed by user id.
    pub(super) async fn profiles_for(
        &self,
        ids: &[UserId],
    ) -> ApplicationResult<HashMap<UserId, PublicUserDto>> {
        let users = self.user_repo.find_by_ids(ids).await?;
        Ok(users
            .into_iter()
            .map(|user| (user.id, PublicUserDto::from(user)))
            .collect())
    }
}
