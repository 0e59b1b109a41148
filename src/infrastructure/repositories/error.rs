use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_TOPIC_SLUG: &str = "topics_slug_key";
const CNT_TOPIC_NAME: &str = "topics_name_key";
const CNT_TOPIC_OWNER: &str = "topics_user_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_USER: &str = "comments_user_id_fkey";
const CNT_REPLY_COMMENT: &str = "comment_replies_comment_id_fkey";
const CNT_REPLY_USER: &str = "comment_replies_user_id_fkey";
const CNT_REACTION_PAIR: &str = "reactions_pkey";
const CNT_REACTION_POST: &str = "reactions_post_id_fkey";
const CNT_REACTION_USER: &str = "reactions_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG | CNT_TOPIC_SLUG => {
                        DomainError::Conflict("slug already exists".into())
                    }
                    CNT_TOPIC_NAME => DomainError::Conflict("topic name already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_POST_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_TOPIC_OWNER => DomainError::NotFound("owner not found".into()),
                    CNT_COMMENT_POST | CNT_REACTION_POST => {
                        DomainError::NotFound("post not found".into())
                    }
                    CNT_REPLY_COMMENT => DomainError::NotFound("comment not found".into()),
                    CNT_COMMENT_USER | CNT_REPLY_USER | CNT_REACTION_USER => {
                        DomainError::NotFound("user not found".into())
                    }
                    CNT_REACTION_PAIR => DomainError::Conflict("reaction already exists".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
