pub mod slug;

pub use slug::{MAX_SLUG_ATTEMPTS, SlugAllocator};
