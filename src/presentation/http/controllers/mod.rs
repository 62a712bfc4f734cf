// src/presentation/http/controllers/mod.rs
pub mod activity;
pub mod auth;
pub mod contacts;
pub mod crosspost;
pub mod posts;
