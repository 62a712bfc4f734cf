// src/application/commands/posts/mod.rs
mod activity;
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use service::{MAX_SLUG_ATTEMPTS, PostCommandService};
pub use update::UpdatePostCommand;
