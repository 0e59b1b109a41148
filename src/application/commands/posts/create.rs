// src/application/commands/posts/create.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{NewPost, PostSlug, PostTitle, short_description_for},
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub publish_now: bool,
    pub topics: Vec<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let now = self.clock.now();

        if let Some(at) = command.publish_at {
            if at < now {
                return Err(ApplicationError::validation_field(
                    "publish_at",
                    "please choose a future date",
                ));
            }
        }
        let publish_at = if command.publish_now {
            Some(now)
        } else {
            command.publish_at
        };

        let topic_ids = self.resolve_topic_ids(&command.topics).await?;
        let short_description = short_description_for(
            command.short_description.as_deref(),
            command.description.as_deref(),
        );

        // Two-phase create: insert under a unique placeholder slug, then let
        // the allocator rename it. Exhaustion rolls the insert back.
        let placeholder = PostSlug::new(Uuid::new_v4().simple().to_string())?;
        let new_post = NewPost {
            author_id: actor.id,
            title: title.clone(),
            slug: placeholder,
            short_description,
            description: command.description,
            cover_image: command.cover_image,
            publish_at,
            topic_ids,
            created_at: now,
            updated_at: now,
        };

        let mut post = self.write_repo.insert(new_post).await?;

        let id = post.id;
        let repo = Arc::clone(&self.write_repo);
        let allocated = self
            .slug_allocator
            .allocate(title.as_str(), move |candidate| {
                let repo = Arc::clone(&repo);
                async move {
                    let slug = PostSlug::new(candidate)?;
                    repo.set_slug(id, &slug).await
                }
            })
            .await;

        match allocated {
            Ok(slug) => {
                post.set_slug(PostSlug::new(slug)?);
                tracing::info!(post_id = i64::from(id), slug = post.slug.as_str(), "post created");
                Ok(post.into())
            }
            Err(err) => {
                self.write_repo.delete(id).await?;
                Err(match err {
                    DomainError::Conflict(_) => ApplicationError::validation_field(
                        "title",
                        "could not allocate a unique slug for this title",
                    ),
                    other => other.into(),
                })
            }
        }
    }
}
