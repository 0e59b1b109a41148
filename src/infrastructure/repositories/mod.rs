pub mod error;
pub mod postgres_comment;
pub mod postgres_post;
pub mod postgres_reaction;
pub mod postgres_topic;
pub mod postgres_user;

pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_reaction::PostgresReactionRepository;
pub use postgres_topic::PostgresTopicRepository;
pub use postgres_user::PostgresUserRepository;
