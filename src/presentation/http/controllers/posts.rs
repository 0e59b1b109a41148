// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{DEFAULT_PAGE_LIMIT, Page, PostDetailsDto, PostDto, PostListItemDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Exact title match.
    #[serde(default)]
    pub q: Option<String>,
    /// Comma-separated topic slugs.
    #[serde(default)]
    pub topics: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
}

impl PostListParams {
    fn topic_slugs(&self) -> Vec<String> {
        self.topics
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|slug| !slug.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub publish_now: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub publish_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub publish_now: bool,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "One page of published posts.", body = Page<PostListItemDto>),
        (status = 400, description = "Invalid pagination parameters.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<Page<PostListItemDto>>> {
    let topics = params.topic_slugs();
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            page: params.page,
            limit: params.limit,
            q: params.q,
            topics,
            author_id: params.author_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}",
    responses(
        (status = 200, description = "Post detail with author and topics.", body = PostDetailsDto),
        (status = 404, description = "Post does not exist or is not published.", body = ErrorBody)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDetailsDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(actor.0.as_ref(), GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Invalid input or slug allocation failed.", body = ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        short_description: payload.short_description,
        description: payload.description,
        cover_image: payload.cover_image,
        publish_at: payload.publish_at,
        publish_now: payload.publish_now,
        topics: payload.topics,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/posts/{slug}",
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 403, description = "Not the post's author.", body = ErrorBody),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        title: payload.title,
        short_description: payload.short_description,
        description: payload.description,
        cover_image: payload.cover_image,
        publish_at: payload.publish_at,
        publish_now: payload.publish_now,
        topics: payload.topics,
    };

    state
        .services
        .post_commands
        .update_post(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{slug}",
    responses(
        (status = 200, description = "Post deleted."),
        (status = 403, description = "Not the post's author.", body = ErrorBody),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .post_commands
        .delete_post(&user, DeletePostCommand { slug })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
