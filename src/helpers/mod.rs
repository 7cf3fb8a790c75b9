pub mod cookie;
pub mod time;
