use crate::domain::contact::entity::{Contact, NewContact};
use crate::domain::contact::value_objects::{ContactId, ContactStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact>;

    /// Newest first.
    async fn list(&self, status: Option<ContactStatus>) -> DomainResult<Vec<Contact>>;

    async fn set_status(&self, id: ContactId, status: ContactStatus) -> DomainResult<Contact>;
}
