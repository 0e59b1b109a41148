//! Seeds a demo author with a few topics and posts, for local development.
//!
//! Usage: `DATABASE_URL=... TOKEN_SECRET=... cargo run --bin seed_demo_data`

use anyhow::Result;
use kiroku_core::application::{
    commands::{
        posts::CreatePostCommand,
        topics::GetOrCreateTopicCommand,
        users::{LoginUserCommand, RegisterUserCommand},
    },
    error::ApplicationError,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use kiroku_core::config::AppConfig;
use kiroku_core::domain::{
    comment::CommentRepository,
    post::{PostReadRepository, PostWriteRepository},
    reaction::ReactionRepository,
    topic::TopicRepository,
    user::UserRepository,
};
use kiroku_core::infrastructure::{
    database,
    repositories::{
        PostgresCommentRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
        PostgresReactionRepository, PostgresTopicRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, HmacTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use std::sync::Arc;

const DEMO_USERNAME: &str = "demo-author";
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let topic_repo: Arc<dyn TopicRepository> = Arc::new(PostgresTopicRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let reaction_repo: Arc<dyn ReactionRepository> =
        Arc::new(PostgresReactionRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(HmacTokenManager::new(
        config.token_secret().as_bytes().to_vec(),
        config.token_ttl().as_secs() as i64,
        Arc::clone(&clock),
    ));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = ApplicationServices::new(
        user_repo,
        post_write_repo,
        post_read_repo,
        topic_repo,
        comment_repo,
        reaction_repo,
        password_hasher,
        token_manager,
        clock,
        slugger,
    );

    let registered = services
        .user_commands
        .register(RegisterUserCommand {
            username: DEMO_USERNAME.into(),
            full_name: Some("Demo Author".into()),
            password: DEMO_PASSWORD.into(),
        })
        .await;
    match registered {
        Ok(user) => tracing::info!(username = %user.username, "demo user created"),
        Err(ApplicationError::Conflict(_)) => {
            tracing::info!(username = DEMO_USERNAME, "demo user already present");
        }
        Err(err) => return Err(err.into()),
    }

    let session = services
        .user_commands
        .login(LoginUserCommand {
            username: DEMO_USERNAME.into(),
            password: DEMO_PASSWORD.into(),
        })
        .await?;
    let actor = services
        .token_manager()
        .authenticate(&session.token.token)
        .await?;

    for name in ["rust", "databases", "writing"] {
        let creation = services
            .topic_commands
            .get_or_create_topic(&actor, GetOrCreateTopicCommand { name: name.into() })
            .await?;
        tracing::info!(
            topic = %creation.topic.name,
            created = creation.created,
            "topic ready"
        );
    }

    let posts = [
        (
            "Hello, world",
            "A first post to prove the pipes work end to end.",
            vec!["writing".to_string()],
        ),
        (
            "Modelling slugs as identities",
            "Why a URL slug should be allocated once and never rewritten afterwards.",
            vec!["rust".to_string(), "writing".to_string()],
        ),
        (
            "Pagination without surprises",
            "Offset pagination with a total count keeps clients simple.",
            vec!["databases".to_string()],
        ),
    ];

    for (title, description, topics) in posts {
        let created = services
            .post_commands
            .create_post(
                &actor,
                CreatePostCommand {
                    title: title.into(),
                    short_description: None,
                    description: Some(description.into()),
                    cover_image: None,
                    publish_at: None,
                    publish_now: true,
                    topics,
                },
            )
            .await;
        match created {
            Ok(post) => tracing::info!(slug = %post.slug, "post created"),
            Err(ApplicationError::Validation { message, .. }) => {
                tracing::warn!(title, %message, "skipping post");
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("seed complete");
    Ok(())
}
