// src/application/queries/topics/list.rs
use super::TopicQueryService;
use crate::application::{
    dto::{Page, PageParams, TopicDto},
    error::ApplicationResult,
};

pub struct ListTopicsQuery {
    pub page: u32,
    pub limit: u32,
    /// Case-insensitive substring match on the topic name.
    pub q: Option<String>,
}

impl TopicQueryService {
    pub async fn list_topics(&self, query: ListTopicsQuery) -> ApplicationResult<Page<TopicDto>> {
        let params = PageParams::new(query.page, query.limit)?;

        let name_contains = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty());

        let (topics, count) = self
            .topic_repo
            .list(name_contains, params.offset, params.limit)
            .await?;

        Ok(Page::new(
            count,
            topics.into_iter().map(Into::into).collect(),
        ))
    }
}
