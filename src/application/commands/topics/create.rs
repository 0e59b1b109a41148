// src/application/commands/topics/create.rs
use std::sync::Arc;

use uuid::Uuid;

use super::TopicCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, TopicDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        topic::{NewTopic, TopicName, TopicSlug},
    },
};

pub struct GetOrCreateTopicCommand {
    pub name: String,
}

#[derive(Debug)]
pub struct TopicCreation {
    pub topic: TopicDto,
    pub created: bool,
}

impl TopicCommandService {
    /// Topic identity is the lowercased name: an existing topic is returned
    /// unchanged, a new one goes through the two-phase insert-then-slug flow.
    pub async fn get_or_create_topic(
        &self,
        actor: &AuthenticatedUser,
        command: GetOrCreateTopicCommand,
    ) -> ApplicationResult<TopicCreation> {
        let name = TopicName::new(command.name)?;

        if let Some(existing) = self.topic_repo.find_by_name(&name).await? {
            return Ok(TopicCreation {
                topic: existing.into(),
                created: false,
            });
        }

        let now = self.clock.now();
        let placeholder = TopicSlug::new(Uuid::new_v4().simple().to_string())?;
        let new_topic = NewTopic {
            name: name.clone(),
            slug: placeholder,
            user_id: Some(actor.id),
            created_at: now,
        };

        let mut topic = match self.topic_repo.insert(new_topic).await {
            Ok(topic) => topic,
            Err(DomainError::Conflict(_)) => {
                // Lost the race on the unique name index; hand back the winner.
                let existing = self.topic_repo.find_by_name(&name).await?.ok_or_else(|| {
                    ApplicationError::infrastructure("topic disappeared after name conflict")
                })?;
                return Ok(TopicCreation {
                    topic: existing.into(),
                    created: false,
                });
            }
            Err(other) => return Err(other.into()),
        };

        let id = topic.id;
        let repo = Arc::clone(&self.topic_repo);
        let allocated = self
            .slug_allocator
            .allocate(name.as_str(), move |candidate| {
                let repo = Arc::clone(&repo);
                async move {
                    let slug = TopicSlug::new(candidate)?;
                    repo.set_slug(id, &slug).await
                }
            })
            .await;

        match allocated {
            Ok(slug) => {
                topic.set_slug(TopicSlug::new(slug)?);
                Ok(TopicCreation {
                    topic: topic.into(),
                    created: true,
                })
            }
            Err(err) => {
                // Roll back the speculative insert before reporting.
                self.topic_repo.delete(id).await?;
                Err(match err {
                    DomainError::Conflict(_) => ApplicationError::validation_field(
                        "name",
                        "could not allocate a unique slug for this topic name",
                    ),
                    other => other.into(),
                })
            }
        }
    }
}
