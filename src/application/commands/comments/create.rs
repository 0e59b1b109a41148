// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentBody, NewComment},
};

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub post_slug: String,
    pub description: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let post = self.resolve_post(&command.post_slug).await?;
        let body = CommentBody::new(command.description)?;
        let now = self.clock.now();

        let comment = self
            .comment_repo
            .insert(NewComment {
                post_id: post.id,
                user_id: actor.id,
                body,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            post_id = i64::from(post.id),
            comment_id = i64::from(comment.id),
            "comment added"
        );
        let users = self.profiles_for(&[comment.user_id]).await?;
        Ok(CommentDto::from_parts(comment, &users))
    }
}
