mod create;
mod service;

pub use create::{GetOrCreateTopicCommand, TopicCreation};
pub use service::TopicCommandService;
