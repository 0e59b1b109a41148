// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PageParams, PostListItemDto},
        error::ApplicationResult,
    },
    domain::{post::PostListFilter, user::UserId},
};

pub struct ListPostsQuery {
    pub page: u32,
    pub limit: u32,
    /// Exact title match when provided.
    pub q: Option<String>,
    /// Topic slugs; unknown slugs are dropped. A filter that resolves to no
    /// topics matches no posts.
    pub topics: Vec<String>,
    pub author_id: Option<i64>,
}

impl PostQueryService {
    /// Public listing: only posts whose publish timestamp is set and already
    /// in the past, newest first.
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<Page<PostListItemDto>> {
        let params = PageParams::new(query.page, query.limit)?;

        let mut filter = PostListFilter {
            visible_before: Some(self.clock.now()),
            title: query.q,
            author_id: query.author_id.map(UserId::new).transpose()?,
            topic_ids: None,
        };

        if !query.topics.is_empty() {
            let topics = self.topic_repo.find_by_slugs(&query.topics).await?;
            filter.topic_ids = Some(topics.into_iter().map(|topic| topic.id).collect());
        }

        let (posts, count) = self
            .read_repo
            .list(&filter, params.offset, params.limit)
            .await?;

        Ok(Page::new(count, posts.into_iter().map(Into::into).collect()))
    }
}
