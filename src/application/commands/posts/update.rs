// src/application/commands/posts/update.rs
use chrono::{DateTime, Utc};

use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostSlug, PostTitle, PostUpdate, short_description_for},
};

/// Partial update addressed by slug; unset fields stay untouched. The slug
/// itself is the post's public identity and never changes here.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub slug: String,
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub publish_now: bool,
    pub topics: Option<Vec<String>>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !post.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden(
                "you don't have access to update this post",
            ));
        }

        let now = self.clock.now();

        if let Some(at) = command.publish_at {
            if post.publish_at != Some(at) && at < now {
                return Err(ApplicationError::validation_field(
                    "publish_at",
                    "please choose a future date",
                ));
            }
        }
        let publish_at = if command.publish_now {
            Some(Some(now))
        } else {
            command.publish_at.map(Some)
        };

        let mut update = PostUpdate::new(post.id, now);

        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(at) = publish_at {
            update = update.with_publish_at(at);
        }
        if let Some(cover_image) = command.cover_image {
            update = update.with_cover_image(cover_image);
        }
        if let Some(description) = &command.description {
            update = update.with_description(description.clone());
        }

        // An explicit short description wins; a fresh description without one
        // recomputes the truncated preview.
        match (&command.short_description, &command.description) {
            (Some(explicit), _) => {
                update = update.with_short_description(explicit.clone());
            }
            (None, Some(description)) => {
                update = update
                    .with_short_description(short_description_for(None, Some(description)));
            }
            (None, None) => {}
        }

        if let Some(topics) = &command.topics {
            let topic_ids = self.resolve_topic_ids(topics).await?;
            update = update.with_topic_ids(topic_ids);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
