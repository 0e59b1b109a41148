// src/domain/comment/entity.rs
use crate::domain::comment::value_objects::{CommentBody, CommentId, ReplyId};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Hard cap on the nested reply thread under a single comment.
pub const MAX_REPLIES_PER_COMMENT: usize = 100;

#[derive(Debug, Clone)]
pub struct Reply {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reply {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn can_take_reply(&self) -> bool {
        self.replies.len() < MAX_REPLIES_PER_COMMENT
    }

    pub fn find_reply(&self, id: ReplyId) -> Option<&Reply> {
        self.replies.iter().find(|reply| reply.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
