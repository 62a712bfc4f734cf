// src/application/ports/mod.rs
pub mod notifier;
pub mod publisher;
pub mod security;
pub mod session_revocation;
pub mod time;
pub mod util;

