pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, MAX_REPLIES_PER_COMMENT, NewComment, NewReply, Reply};
pub use repository::CommentRepository;
pub use value_objects::{CommentBody, CommentId, ReplyId};
