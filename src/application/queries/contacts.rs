use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ContactDto},
        error::ApplicationResult,
    },
    domain::contact::{ContactRepository, ContactStatus},
};

#[derive(Default)]
pub struct ListContactsQuery {
    pub status: Option<String>,
}

pub struct ContactQueryService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactQueryService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    pub async fn list_contacts(
        &self,
        actor: &AuthenticatedUser,
        query: ListContactsQuery,
    ) -> ApplicationResult<Vec<ContactDto>> {
        ensure_capability(actor, "contacts", "read")?;

        let status = query
            .status
            .as_deref()
            .map(str::parse::<ContactStatus>)
            .transpose()?;
        let contacts = self.contact_repo.list(status).await?;
        Ok(contacts.into_iter().map(Into::into).collect())
    }
}
