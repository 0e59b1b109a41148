// src/application/queries/comments/list.rs
use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, Page, PageParams, PublicUserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::PostSlug, user::UserId},
};
use std::collections::HashMap;

pub struct ListCommentsQuery {
    pub post_slug: String,
    pub page: u32,
    pub limit: u32,
}

impl CommentQueryService {
    /// One page of a post's comment thread in insertion order, with the
    /// commenting and replying users' public profiles resolved in one batch.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Page<CommentDto>> {
        let params = PageParams::new(query.page, query.limit)?;

        let slug = PostSlug::new(query.post_slug)?;
        let post = self
            .post_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let (comments, count) = self
            .comment_repo
            .list_by_post(post.id, params.offset, params.limit)
            .await?;

        let mut user_ids: Vec<UserId> = Vec::new();
        for comment in &comments {
            if !user_ids.contains(&comment.user_id) {
                user_ids.push(comment.user_id);
            }
            for reply in &comment.replies {
                if !user_ids.contains(&reply.user_id) {
                    user_ids.push(reply.user_id);
                }
            }
        }

        let users: HashMap<UserId, PublicUserDto> = self
            .user_repo
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, PublicUserDto::from(user)))
            .collect();

        Ok(Page::new(
            count,
            comments
                .into_iter()
                .map(|comment| CommentDto::from_parts(comment, &users))
                .collect(),
        ))
    }
}
