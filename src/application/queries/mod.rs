pub mod comments;
pub mod posts;
pub mod topics;
pub mod users;
