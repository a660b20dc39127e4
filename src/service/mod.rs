pub mod auth;
pub mod prompts;
