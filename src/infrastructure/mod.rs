pub mod database;
pub mod mail;
pub mod publishing;
pub mod repositories;
pub mod security;
pub mod time;
pub mod util;
