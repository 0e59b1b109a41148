// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDetailsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    /// Detail lookup by slug. An unpublished post is visible only to its
    /// author; everyone else gets not-found rather than a permission error,
    /// so drafts don't leak their existence.
    pub async fn get_post_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDetailsDto> {
        let slug = PostSlug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let now = self.clock.now();
        if !post.is_visible_at(now) {
            let is_author = actor.is_some_and(|actor| post.is_authored_by(actor.id));
            if !is_author {
                return Err(ApplicationError::not_found("post not found"));
            }
        }

        let author = self
            .user_repo
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let topics = self.topic_repo.find_by_ids(&post.topic_ids).await?;

        Ok(PostDetailsDto::from_parts(
            post,
            author.into(),
            topics.into_iter().map(Into::into).collect(),
        ))
    }
}
