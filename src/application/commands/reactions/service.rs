// src/application/commands/reactions/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        post::{Post, PostReadRepository, PostSlug},
        reaction::{MAX_REACTIONS_PER_POST, ReactionRepository},
    },
};

pub struct ReactionCommandService {
    reaction_repo: Arc<dyn ReactionRepository>,
    post_repo: Arc<dyn PostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl ReactionCommandService {
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reaction_repo,
            post_repo,
            clock,
        }
    }

    async fn resolve_post(&self, slug: &str) -> ApplicationResult<Post> {
        let slug = PostSlug::new(slug)?;
        self.post_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    /// Record the actor's reaction. Idempotent; additions past the per-post
    /// cap are silently ignored.
    pub async fn add_reaction(
        &self,
        actor: &AuthenticatedUser,
        post_slug: &str,
    ) -> ApplicationResult<()> {
        let post = self.resolve_post(post_slug).await?;

        if self.reaction_repo.count_by_post(post.id).await? >= MAX_REACTIONS_PER_POST {
            return Ok(());
        }

        self.reaction_repo
            .add(post.id, actor.id, self.clock.now())
            .await?;
        Ok(())
    }

    pub async fn remove_reaction(
        &self,
        actor: &AuthenticatedUser,
        post_slug: &str,
    ) -> ApplicationResult<()> {
        let post = self.resolve_post(post_slug).await?;
        self.reaction_repo.remove(post.id, actor.id).await?;
        Ok(())
    }
}
