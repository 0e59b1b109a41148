// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};
use crate::domain::topic::TopicId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Number of leading description characters used when no explicit short
/// description is supplied.
pub const SHORT_DESCRIPTION_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub short_description: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub topic_ids: Vec<TopicId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// A post is publicly visible once its publish timestamp is set and in
    /// the past.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.publish_at, Some(at) if at < now)
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn set_slug(&mut self, slug: PostSlug) {
        self.slug = slug;
    }
}

/// Derive the stored short description: an explicit value wins, otherwise the
/// first [`SHORT_DESCRIPTION_LEN`] characters of the description, else empty.
pub fn short_description_for(
    explicit: Option<&str>,
    description: Option<&str>,
) -> String {
    match explicit {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => description
            .map(|text| text.chars().take(SHORT_DESCRIPTION_LEN).collect())
            .unwrap_or_default(),
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub short_description: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<DateTime<Utc>>,
    pub topic_ids: Vec<TopicId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial-merge update: unset fields leave the stored value untouched.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub publish_at: Option<Option<DateTime<Utc>>>,
    pub topic_ids: Option<Vec<TopicId>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            short_description: None,
            description: None,
            cover_image: None,
            publish_at: None,
            topic_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_short_description(mut self, short_description: String) -> Self {
        self.short_description = Some(short_description);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_cover_image(mut self, cover_image: String) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn with_publish_at(mut self, publish_at: Option<DateTime<Utc>>) -> Self {
        self.publish_at = Some(publish_at);
        self
    }

    pub fn with_topic_ids(mut self, topic_ids: Vec<TopicId>) -> Self {
        self.topic_ids = Some(topic_ids);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post(publish_at: Option<DateTime<Utc>>) -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            author_id: UserId::new(1).unwrap(),
            title: PostTitle::new("title").unwrap(),
            slug: PostSlug::new("title").unwrap(),
            short_description: String::new(),
            description: None,
            cover_image: None,
            publish_at,
            topic_ids: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unpublished_post_is_not_visible() {
        let now = Utc::now();
        assert!(!sample_post(None).is_visible_at(now));
    }

    #[test]
    fn future_publish_at_is_not_visible_until_it_passes() {
        let now = Utc::now();
        let post = sample_post(Some(now + Duration::hours(1)));
        assert!(!post.is_visible_at(now));
        assert!(post.is_visible_at(now + Duration::hours(2)));
    }

    #[test]
    fn short_description_prefers_explicit_value() {
        let got = short_description_for(Some("summary"), Some("long description"));
        assert_eq!(got, "summary");
    }

    #[test]
    fn short_description_truncates_to_200_chars() {
        let description = "A".repeat(500);
        let got = short_description_for(None, Some(&description));
        assert_eq!(got, "A".repeat(200));
    }

    #[test]
    fn short_description_defaults_to_empty() {
        assert_eq!(short_description_for(None, None), "");
        assert_eq!(short_description_for(Some(""), None), "");
    }
}
