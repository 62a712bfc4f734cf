mod bootstrap;
mod login;
mod logout;
mod password;
mod service;

pub use bootstrap::{BootstrapAdminCommand, BootstrapOutcome};
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
