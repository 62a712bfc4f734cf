// tests/support/mocks/mod.rs
pub mod activity;
pub mod contacts;
pub mod crosspost;
pub mod posts;
pub mod security;
pub mod time;
pub mod users;

pub use activity::InMemoryActivity;
pub use contacts::{CapturingNotifier, InMemoryContacts};
pub use crosspost::{FakePublisher, InMemoryCredentials};
pub use posts::InMemoryPosts;
pub use security::{ADMIN_TOKEN, EDITOR_TOKEN, FakePasswordHasher, FakeTokenManager, authenticated};
pub use time::{FIXED_NOW, FixedClock};
pub use users::InMemoryUsers;
