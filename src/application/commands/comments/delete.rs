// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

#[derive(Debug, Clone)]
pub struct RemoveCommentCommand {
    pub post_slug: String,
    pub comment_id: i64,
}

impl CommentCommandService {
    pub async fn remove_comment(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveCommentCommand,
    ) -> ApplicationResult<()> {
        let comment = self
            .resolve_comment(&command.post_slug, command.comment_id)
            .await?;

        if !comment.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "you don't have access to delete this comment",
            ));
        }

        self.comment_repo.delete(comment.id).await?;
        tracing::info!(comment_id = i64::from(comment.id), "comment deleted");
        Ok(())
    }
}
