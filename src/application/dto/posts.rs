use crate::application::dto::{PublicUserDto, TopicDto};
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub topic_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            short_description: post.short_description,
            description: post.description,
            cover_image: post.cover_image,
            publish_at: post.publish_at,
            topic_ids: post.topic_ids.into_iter().map(Into::into).collect(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// List item: no description body, the listing projects it away.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostListItemDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub topic_ids: Vec<i64>,
}

impl From<Post> for PostListItemDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            author_id: post.author_id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            short_description: post.short_description,
            cover_image: post.cover_image,
            publish_at: post.publish_at,
            topic_ids: post.topic_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Detail view with the author's public profile and fully resolved topics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailsDto {
    pub id: i64,
    pub author: PublicUserDto,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub topics: Vec<TopicDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDetailsDto {
    pub fn from_parts(post: Post, author: PublicUserDto, topics: Vec<TopicDto>) -> Self {
        Self {
            id: post.id.into(),
            author,
            title: post.title.into(),
            slug: post.slug.into(),
            short_description: post.short_description,
            description: post.description,
            cover_image: post.cover_image,
            publish_at: post.publish_at,
            topics,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
