// tests/support/helpers.rs
use super::mocks::{
    MemoryCommentRepo, MemoryPostRepo, MemoryReactionRepo, MemoryTopicRepo, MemoryUserRepo,
    PlainPasswordHasher, TestSlugGenerator,
};
use axum::body::{self, Body};
use axum::http::{Request, Response, StatusCode, header};
use kiroku_core::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use kiroku_core::application::dto::AuthenticatedUser;
use kiroku_core::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::SlugGenerator,
};
use kiroku_core::application::services::ApplicationServices;
use kiroku_core::infrastructure::{security::HmacTokenManager, time::SystemClock};
use kiroku_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

const TEST_TOKEN_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

pub struct TestContext {
    pub user_repo: Arc<MemoryUserRepo>,
    pub topic_repo: Arc<MemoryTopicRepo>,
    pub post_repo: Arc<MemoryPostRepo>,
    pub comment_repo: Arc<MemoryCommentRepo>,
    pub reaction_repo: Arc<MemoryReactionRepo>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_context() -> TestContext {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    build_context_with_clock(clock)
}

pub fn build_context_with_clock(clock: Arc<dyn Clock>) -> TestContext {
    let user_repo = Arc::new(MemoryUserRepo::default());
    let topic_repo = Arc::new(MemoryTopicRepo::default());
    let post_repo = Arc::new(MemoryPostRepo::default());
    let comment_repo = Arc::new(MemoryCommentRepo::default());
    let reaction_repo = Arc::new(MemoryReactionRepo::default());

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(PlainPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(HmacTokenManager::new(
        TEST_TOKEN_SECRET.to_vec(),
        3600,
        Arc::clone(&clock),
    ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TestSlugGenerator);

    let user_port: Arc<dyn kiroku_core::domain::user::UserRepository> = user_repo.clone();
    let write_port: Arc<dyn kiroku_core::domain::post::PostWriteRepository> = post_repo.clone();
    let read_port: Arc<dyn kiroku_core::domain::post::PostReadRepository> = post_repo.clone();
    let topic_port: Arc<dyn kiroku_core::domain::topic::TopicRepository> = topic_repo.clone();
    let comment_port: Arc<dyn kiroku_core::domain::comment::CommentRepository> =
        comment_repo.clone();
    let reaction_port: Arc<dyn kiroku_core::domain::reaction::ReactionRepository> =
        reaction_repo.clone();

    let services = Arc::new(ApplicationServices::new(
        user_port,
        write_port,
        read_port,
        topic_port,
        comment_port,
        reaction_port,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ));

    TestContext {
        user_repo,
        topic_repo,
        post_repo,
        comment_repo,
        reaction_repo,
        services,
    }
}

impl TestContext {
    pub fn router(&self) -> axum::Router {
        self.router_with_origins(&["*".to_string()])
    }

    pub fn router_with_origins(&self, allowed_origins: &[String]) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            allowed_origins,
        )
    }

    /// Register a user and return an authenticated actor plus the raw bearer
    /// token for HTTP requests.
    pub async fn register_actor(&self, username: &str) -> (AuthenticatedUser, String) {
        self.services
            .user_commands
            .register(RegisterUserCommand {
                username: username.into(),
                full_name: None,
                password: "test-password".into(),
            })
            .await
            .expect("register test user");

        let session = self
            .services
            .user_commands
            .login(LoginUserCommand {
                username: username.into(),
                password: "test-password".into(),
            })
            .await
            .expect("login test user");

        let actor = self
            .services
            .token_manager()
            .authenticate(&session.token.token)
            .await
            .expect("authenticate test token");

        (actor, session.token.token)
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, payload: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert an error body of the `{code, message, field?}` shape.
pub async fn assert_error_response(
    response: Response<Body>,
    expected_status: StatusCode,
    expected_code: &str,
) -> Value {
    let (status, json) = read_json(response).await;
    assert_eq!(status, expected_status, "unexpected status: {json}");
    let code = json.get("code").and_then(Value::as_str).unwrap_or("");
    assert_eq!(code, expected_code, "unexpected error code: {json}");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message: {json}");
    json
}
