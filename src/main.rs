use anyhow::Result;
use kiroku_core::application::{
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
use kiroku_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

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

    let services = Arc::new(ApplicationServices::new(
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
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install terminate handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
