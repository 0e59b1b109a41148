pub mod comments;
pub mod posts;
pub mod reactions;
pub mod topics;
pub mod users;
