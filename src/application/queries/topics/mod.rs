mod list;
mod service;

pub use list::ListTopicsQuery;
pub use service::TopicQueryService;
