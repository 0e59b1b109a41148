// src/application/commands/comments/replies.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReplyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentBody, MAX_REPLIES_PER_COMMENT, NewReply, ReplyId},
};

#[derive(Debug, Clone)]
pub struct AddReplyCommand {
    pub post_slug: String,
    pub comment_id: i64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct EditReplyCommand {
    pub post_slug: String,
    pub comment_id: i64,
    pub reply_id: i64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct RemoveReplyCommand {
    pub post_slug: String,
    pub comment_id: i64,
    pub reply_id: i64,
}

impl CommentCommandService {
    pub async fn add_reply(
        &self,
        actor: &AuthenticatedUser,
        command: AddReplyCommand,
    ) -> ApplicationResult<ReplyDto> {
        let comment = self
            .resolve_comment(&command.post_slug, command.comment_id)
            .await?;

        if !comment.can_take_reply() {
            return Err(ApplicationError::validation(format!(
                "a comment can hold at most {MAX_REPLIES_PER_COMMENT} replies"
            )));
        }

        let body = CommentBody::new(command.description)?;
        let now = self.clock.now();
        let reply = self
            .comment_repo
            .insert_reply(NewReply {
                comment_id: comment.id,
                user_id: actor.id,
                body,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let users = self.profiles_for(&[reply.user_id]).await?;
        Ok(ReplyDto::from_parts(reply, &users))
    }

    /// Edit a nested reply. Only the reply's own author may touch it; a
    /// missing reply reports the same permission error so ids can't be probed.
    pub async fn edit_reply(
        &self,
        actor: &AuthenticatedUser,
        command: EditReplyCommand,
    ) -> ApplicationResult<()> {
        let comment = self
            .resolve_comment(&command.post_slug, command.comment_id)
            .await?;

        let reply_id = ReplyId::new(command.reply_id)?;
        let owned = comment
            .find_reply(reply_id)
            .is_some_and(|reply| reply.is_authored_by(actor.id));
        if !owned {
            return Err(ApplicationError::forbidden(
                "you don't have permission to update this reply",
            ));
        }

        let body = CommentBody::new(command.description)?;
        self.comment_repo
            .update_reply(reply_id, &body, self.clock.now())
            .await?;
        Ok(())
    }

    pub async fn remove_reply(
        &self,
        actor: &AuthenticatedUser,
        command: RemoveReplyCommand,
    ) -> ApplicationResult<()> {
        let comment = self
            .resolve_comment(&command.post_slug, command.comment_id)
            .await?;

        let reply_id = ReplyId::new(command.reply_id)?;
        let owned = comment
            .find_reply(reply_id)
            .is_some_and(|reply| reply.is_authored_by(actor.id));
        if !owned {
            return Err(ApplicationError::forbidden(
                "you don't have permission to delete this reply",
            ));
        }

        self.comment_repo.delete_reply(reply_id).await?;
        Ok(())
    }
}
