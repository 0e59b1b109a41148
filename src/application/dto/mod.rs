pub mod auth;
pub mod comments;
pub mod pagination;
pub mod posts;
pub mod topics;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::{CommentDto, ReplyDto};
pub use pagination::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, Page, PageParams};
pub use posts::{PostDetailsDto, PostDto, PostListItemDto};
pub use topics::TopicDto;
pub use users::{PublicUserDto, UserDto};
