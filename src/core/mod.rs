pub mod handler;
pub mod log;
pub mod time;
pub mod types;
