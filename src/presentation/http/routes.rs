// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, comments, posts, reactions, topics},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Browser origins allowed to call the API. A literal `*` entry opens it up;
/// anything that does not parse as an origin is dropped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/auth/register", axum::routing::post(auth::register))
        .route("/api/v1/auth/login", axum::routing::post(auth::login))
        .route("/api/v1/auth/me", get(auth::profile))
        .route(
            "/api/v1/topics",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/{slug}",
            get(posts::get_post_by_slug)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/v1/posts/{slug}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/v1/posts/{slug}/comments/{comment_id}",
            axum::routing::put(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/api/v1/posts/{slug}/comments/{comment_id}/replies",
            axum::routing::post(comments::create_reply),
        )
        .route(
            "/api/v1/posts/{slug}/comments/{comment_id}/replies/{reply_id}",
            axum::routing::put(comments::update_reply).delete(comments::delete_reply),
        )
        .route(
            "/api/v1/posts/{slug}/reactions",
            axum::routing::post(reactions::add_reaction).delete(reactions::remove_reaction),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
