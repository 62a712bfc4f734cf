pub mod activity;
pub mod contact;
pub mod crosspost;
pub mod errors;
pub mod post;
pub mod user;
