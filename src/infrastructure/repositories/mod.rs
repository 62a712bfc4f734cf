// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_activity;
mod postgres_contact;
mod postgres_crosspost;
mod postgres_post;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_activity::PostgresActivityRepository;
pub use postgres_contact::PostgresContactRepository;
pub use postgres_crosspost::PostgresCrosspostCredentialRepository;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_user::PostgresUserRepository;
