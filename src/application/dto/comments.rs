use crate::application::dto::PublicUserDto;
use crate::domain::comment::{Comment, Reply};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Nested reply with the replying user's public profile resolved. The user is
/// optional so a since-deleted account does not break the thread.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyDto {
    pub id: i64,
    pub user: Option<PublicUserDto>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReplyDto {
    pub fn from_parts(reply: Reply, users: &HashMap<UserId, PublicUserDto>) -> Self {
        Self {
            id: reply.id.into(),
            user: users.get(&reply.user_id).cloned(),
            description: reply.body.into(),
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub user: Option<PublicUserDto>,
    pub description: String,
    pub replies: Vec<ReplyDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentDto {
    pub fn from_parts(comment: Comment, users: &HashMap<UserId, PublicUserDto>) -> Self {
        Self {
            id: comment.id.into(),
            user: users.get(&comment.user_id).cloned(),
            description: comment.body.into(),
            replies: comment
                .replies
                .into_iter()
                .map(|reply| ReplyDto::from_parts(reply, users))
                .collect(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
