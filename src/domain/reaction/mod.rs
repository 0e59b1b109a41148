pub mod repository;

pub use repository::ReactionRepository;

/// Hard cap on reactions per post; additions past it are ignored.
pub const MAX_REACTIONS_PER_POST: u64 = 100;
