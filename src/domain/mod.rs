pub mod comment;
pub mod errors;
pub mod post;
pub mod reaction;
pub mod services;
pub mod topic;
pub mod user;
