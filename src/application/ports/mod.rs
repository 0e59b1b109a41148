pub mod security;
pub mod time;
pub mod util;
