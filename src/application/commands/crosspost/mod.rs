mod connect;
mod publish;
mod service;

pub use connect::SaveCrosspostCredentialCommand;
pub use publish::CrosspostPostCommand;
pub use service::CrosspostCommandService;
