mod create;
mod delete;
mod replies;
mod service;
mod update;

pub use create::AddCommentCommand;
pub use delete::RemoveCommentCommand;
pub use replies::{AddReplyCommand, EditReplyCommand, RemoveReplyCommand};
pub use service::CommentCommandService;
pub use update::EditCommentCommand;
