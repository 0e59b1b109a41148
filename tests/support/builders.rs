// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use kiroku_core::application::commands::posts::CreatePostCommand;
use serde_json::{Value, json};

pub fn create_post_command(title: &str) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        short_description: None,
        description: Some(format!("{title} body text")),
        cover_image: None,
        publish_at: None,
        publish_now: true,
        topics: Vec::new(),
    }
}

pub fn draft_post_command(title: &str) -> CreatePostCommand {
    CreatePostCommand {
        publish_now: false,
        ..create_post_command(title)
    }
}

pub fn scheduled_post_command(title: &str, publish_at: DateTime<Utc>) -> CreatePostCommand {
    CreatePostCommand {
        publish_now: false,
        publish_at: Some(publish_at),
        ..create_post_command(title)
    }
}

pub fn in_one_hour() -> DateTime<Utc> {
    Utc::now() + Duration::hours(1)
}

pub fn create_post_json(title: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} body text"),
        "publish_now": true,
    })
}
