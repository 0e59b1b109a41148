// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{
        AddCommentCommand, AddReplyCommand, EditCommentCommand, EditReplyCommand,
        RemoveCommentCommand, RemoveReplyCommand,
    },
    dto::{CommentDto, DEFAULT_PAGE_LIMIT, Page, ReplyDto},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
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
pub struct CommentListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub description: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{slug}/comments",
    responses(
        (status = 200, description = "One page of the post's comment thread.", body = Page<CommentDto>),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Page<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            post_slug: slug,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{slug}/comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added.", body = CommentDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let comment = state
        .services
        .comment_commands
        .add_comment(
            &user,
            AddCommentCommand {
                post_slug: slug,
                description: payload.description,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{slug}/comments/{comment_id}",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = CommentDto),
        (status = 403, description = "Not the comment's author.", body = ErrorBody),
        (status = 404, description = "Post or comment does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, comment_id)): Path<(String, i64)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .edit_comment(
            &user,
            EditCommentCommand {
                post_slug: slug,
                comment_id,
                description: payload.description,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{slug}/comments/{comment_id}",
    responses(
        (status = 200, description = "Comment deleted."),
        (status = 403, description = "Not the comment's author.", body = ErrorBody),
        (status = 404, description = "Post or comment does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, comment_id)): Path<(String, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .remove_comment(
            &user,
            RemoveCommentCommand {
                post_slug: slug,
                comment_id,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{slug}/comments/{comment_id}/replies",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Reply added.", body = ReplyDto),
        (status = 400, description = "The comment's reply thread is full.", body = ErrorBody),
        (status = 404, description = "Post or comment does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, comment_id)): Path<(String, i64)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<ReplyDto>)> {
    let reply = state
        .services
        .comment_commands
        .add_reply(
            &user,
            AddReplyCommand {
                post_slug: slug,
                comment_id,
                description: payload.description,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(reply)))
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{slug}/comments/{comment_id}/replies/{reply_id}",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Reply updated."),
        (status = 403, description = "Not the reply's author.", body = ErrorBody),
        (status = 404, description = "Post or comment does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn update_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, comment_id, reply_id)): Path<(String, i64, i64)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .edit_reply(
            &user,
            EditReplyCommand {
                post_slug: slug,
                comment_id,
                reply_id,
                description: payload.description,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "updated" })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{slug}/comments/{comment_id}/replies/{reply_id}",
    responses(
        (status = 200, description = "Reply deleted."),
        (status = 403, description = "Not the reply's author.", body = ErrorBody),
        (status = 404, description = "Post or comment does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn delete_reply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((slug, comment_id, reply_id)): Path<(String, i64, i64)>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .comment_commands
        .remove_reply(
            &user,
            RemoveReplyCommand {
                post_slug: slug,
                comment_id,
                reply_id,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
