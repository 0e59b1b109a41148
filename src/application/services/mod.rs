// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService, posts::PostCommandService,
            reactions::ReactionCommandService, topics::TopicCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            comments::CommentQueryService, posts::PostQueryService, topics::TopicQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        comment::CommentRepository,
        post::{PostReadRepository, PostWriteRepository},
        reaction::ReactionRepository,
        services::SlugAllocator,
        topic::TopicRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub reaction_commands: Arc<ReactionCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(slugger));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&topic_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&reaction_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&clock),
        ));

        let topic_commands = Arc::new(TopicCommandService::new(
            Arc::clone(&topic_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let reaction_commands = Arc::new(ReactionCommandService::new(
            reaction_repo,
            Arc::clone(&post_read_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            comment_repo,
            Arc::clone(&post_read_repo),
            Arc::clone(&user_repo),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            post_read_repo,
            Arc::clone(&topic_repo),
            Arc::clone(&user_repo),
            clock,
        ));
        let topic_queries = Arc::new(TopicQueryService::new(topic_repo));
        let user_queries = Arc::new(UserQueryService::new(user_repo));

        Self {
            user_commands,
            post_commands,
            topic_commands,
            comment_commands,
            reaction_commands,
            post_queries,
            topic_queries,
            comment_queries,
            user_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
