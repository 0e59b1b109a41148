// src/presentation/http/controllers/reactions.rs
use crate::presentation::http::error::{ErrorBody, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/v1/posts/{slug}/reactions",
    responses(
        (status = 200, description = "Reaction recorded (idempotent)."),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Reactions"
)]
pub async fn add_reaction(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .reaction_commands
        .add_reaction(&user, &slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "reaction added" })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{slug}/reactions",
    responses(
        (status = 200, description = "Reaction withdrawn (idempotent)."),
        (status = 401, description = "Missing or invalid token.", body = ErrorBody),
        (status = 404, description = "Post does not exist.", body = ErrorBody)
    ),
    security(("bearerAuth" = [])),
    tag = "Reactions"
)]
pub async fn remove_reaction(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .reaction_commands
        .remove_reaction(&user, &slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "reaction removed" })))
}
