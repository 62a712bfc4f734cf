pub mod activity;
pub mod contacts;
pub mod posts;
pub mod users;
