// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::topics::create_topic,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::update_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::comments::create_reply,
        crate::presentation::http::controllers::comments::update_reply,
        crate::presentation::http::controllers::comments::delete_reply,
        crate::presentation::http::controllers::reactions::add_reaction,
        crate::presentation::http::controllers::reactions::remove_reaction,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::topics::TopicListParams,
            crate::presentation::http::controllers::topics::CreateTopicRequest,
            crate::presentation::http::controllers::posts::PostListParams,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::comments::CommentListParams,
            crate::presentation::http::controllers::comments::CommentRequest,
            crate::application::dto::UserDto,
            crate::application::dto::PublicUserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::TopicDto,
            crate::application::dto::PostDto,
            crate::application::dto::PostListItemDto,
            crate::application::dto::PostDetailsDto,
            crate::application::dto::CommentDto,
            crate::application::dto::ReplyDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration and session endpoints"),
        (name = "Topics", description = "Topic taxonomy endpoints"),
        (name = "Posts", description = "Post authoring and reading endpoints"),
        (name = "Comments", description = "Comment thread endpoints"),
        (name = "Reactions", description = "Post reaction endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Kiroku API",
        description = "Blogging platform backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api/docs/openapi.json", get(serve_openapi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_the_public_surface() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/auth/register",
            "/api/v1/auth/login",
            "/api/v1/auth/me",
            "/api/v1/topics",
            "/api/v1/posts",
            "/api/v1/posts/{slug}",
            "/api/v1/posts/{slug}/comments",
            "/api/v1/posts/{slug}/comments/{comment_id}",
            "/api/v1/posts/{slug}/comments/{comment_id}/replies",
            "/api/v1/posts/{slug}/comments/{comment_id}/replies/{reply_id}",
            "/api/v1/posts/{slug}/reactions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
