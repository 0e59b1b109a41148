// src/presentation/http/controllers/topics.rs
use crate::application::{
    commands::topics::GetOrCreateTopicCommand,
    dto::{DEFAULT_PAGE_LIMIT, Page, TopicDto},
    queries::topics::ListTopicsQuery,
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/topics",
    responses(
        (status = 200, description = "One page of topics.", body = Page<TopicDto>),
        (status = 400, description = "Invalid pagination parameters.", body = ErrorBody)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TopicListParams>,
) -> HttpResult<Json<Page<TopicDto>>> {
    state
        .services
        .topic_queries
        .list_topics(ListTopicsQuery {
            page: params.page,
            limit: params.limit,
            q: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created.", body = TopicDto),
        (status = 200, description = "Topic already existed.", body = TopicDto),
        (status = 400, description = "Invalid topic name.", body = ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Topics"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateTopicRequest>,
) -> HttpResult<(StatusCode, Json<TopicDto>)> {
    let creation = state
        .services
        .topic_commands
        .get_or_create_topic(&user, GetOrCreateTopicCommand { name: payload.name })
        .await
        .into_http()?;

    let status = if creation.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(creation.topic)))
}
