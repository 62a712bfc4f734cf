pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Contact, NewContact};
pub use repository::ContactRepository;
pub use value_objects::{ContactEmail, ContactId, ContactMessage, ContactName, ContactStatus};
