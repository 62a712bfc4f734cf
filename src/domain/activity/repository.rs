use crate::domain::activity::entity::{ActivityEvent, NewActivityEvent};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn record(&self, event: NewActivityEvent) -> DomainResult<ActivityEvent>;

    /// Events with `from <= created_at < to`.
    async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<ActivityEvent>>;
}
