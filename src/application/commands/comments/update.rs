// src/application/commands/comments/update.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentBody,
};

#[derive(Debug, Clone)]
pub struct EditCommentCommand {
    pub post_slug: String,
    pub comment_id: i64,
    pub description: String,
}

impl CommentCommandService {
    pub async fn edit_comment(
        &self,
        actor: &AuthenticatedUser,
        command: EditCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let mut comment = self
            .resolve_comment(&command.post_slug, command.comment_id)
            .await?;

        if !comment.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "you don't have access to update this comment",
            ));
        }

        let body = CommentBody::new(command.description)?;
        let now = self.clock.now();
        self.comment_repo
            .update_body(comment.id, &body, now)
            .await?;

        comment.body = body;
        comment.updated_at = now;

        let users = self.profiles_for(&Self::participant_ids(&comment)).await?;
        Ok(CommentDto::from_parts(comment, &users))
    }
}
