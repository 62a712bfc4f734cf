pub mod contacts;
pub mod crosspost;
pub mod posts;
pub mod users;

pub(crate) mod capability;
