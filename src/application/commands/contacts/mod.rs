// src/application/commands/contacts/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ContactDto},
        error::ApplicationResult,
        ports::{
            notifier::{ContactNotification, ContactNotifier},
            time::Clock,
        },
    },
    domain::contact::{
        ContactEmail, ContactId, ContactMessage, ContactName, ContactRepository, ContactStatus,
        NewContact,
    },
};

pub struct SubmitContactCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub struct MarkContactReadCommand {
    pub id: i64,
}

pub struct ContactCommandService {
    contact_repo: Arc<dyn ContactRepository>,
    notifier: Arc<dyn ContactNotifier>,
    clock: Arc<dyn Clock>,
}

impl ContactCommandService {
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        notifier: Arc<dyn ContactNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contact_repo,
            notifier,
            clock,
        }
    }

    /// Store the message for the admin inbox, then deliver it to the owner.
    ///
    /// Storage is best effort; delivery is what the visitor is told about.
    pub async fn submit_contact(&self, command: SubmitContactCommand) -> ApplicationResult<()> {
        let contact = NewContact {
            name: ContactName::new(command.name)?,
            email: ContactEmail::new(command.email)?,
            message: ContactMessage::new(command.message)?,
            created_at: self.clock.now(),
        };
        let notification = ContactNotification {
            name: contact.name.to_string(),
            email: contact.email.to_string(),
            message: contact.message.as_str().to_string(),
        };

        match self.contact_repo.insert(contact).await {
            Ok(stored) => tracing::info!(contact_id = stored.id.0, "contact message stored"),
            Err(err) => tracing::warn!(error = %err, "failed to store contact message"),
        }

        self.notifier.notify(notification).await
    }

    pub async fn mark_read(
        &self,
        actor: &AuthenticatedUser,
        command: MarkContactReadCommand,
    ) -> ApplicationResult<ContactDto> {
        ensure_capability(actor, "contacts", "update")?;

        let id = ContactId::new(command.id)?;
        let contact = self.contact_repo.set_status(id, ContactStatus::Read).await?;
        Ok(contact.into())
    }
}
