use crate::application::ApplicationResult;
use async_trait::async_trait;

/// A contact form submission as delivered to the site owner.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, notification: ContactNotification) -> ApplicationResult<()>;
}
