use crate::domain::topic::Topic;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id.into(),
            name: topic.name.into(),
            slug: topic.slug.into(),
        }
    }
}
