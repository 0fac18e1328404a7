pub mod api;
pub mod common;
pub mod prompts;
pub mod workspace;
