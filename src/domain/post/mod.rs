pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate, SHORT_DESCRIPTION_LEN, short_description_for};
pub use repository::{PostListFilter, PostReadRepository, PostWriteRepository};
pub use value_objects::{PostId, PostSlug, PostTitle};
