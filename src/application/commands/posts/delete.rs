// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct DeletePostCommand {
    pub slug: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "you don't have access to delete this post",
            ));
        }

        // The thread and reactions go with the post.
        self.comment_repo.delete_by_post(post.id).await?;
        self.reaction_repo.delete_by_post(post.id).await?;
        self.write_repo.delete(post.id).await?;
        tracing::info!(slug = slug.as_str(), "post deleted");
        Ok(())
    }
}
