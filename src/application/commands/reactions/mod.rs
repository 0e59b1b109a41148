mod service;

pub use service::ReactionCommandService;
