// tests/support/mocks/contacts.rs
use async_trait::async_trait;
use folio_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::notifier::{ContactNotification, ContactNotifier},
};
use folio_core::domain::contact::{
    Contact, ContactId, ContactRepository, ContactStatus, NewContact,
};
use folio_core::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct InMemoryContacts {
    contacts: Mutex<Vec<Contact>>,
    fail_inserts: AtomicBool,
}

impl InMemoryContacts {
    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContacts {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("contacts table unavailable".into()));
        }
        let mut contacts = self.contacts.lock().unwrap();
        let stored = Contact {
            id: ContactId(i64::try_from(contacts.len()).unwrap() + 1),
            name: contact.name,
            email: contact.email,
            message: contact.message,
            status: ContactStatus::Unread,
            created_at: contact.created_at,
        };
        contacts.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, status: Option<ContactStatus>) -> DomainResult<Vec<Contact>> {
        let mut contacts: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(contacts)
    }

    async fn set_status(&self, id: ContactId, status: ContactStatus) -> DomainResult<Contact> {
        let mut contacts = self.contacts.lock().unwrap();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("contact not found".into()))?;
        contact.status = status;
        Ok(contact.clone())
    }
}

/// Records every notification; can be switched to fail like a broken SMTP relay.
#[derive(Default)]
pub struct CapturingNotifier {
    sent: Mutex<Vec<ContactNotification>>,
    fail: AtomicBool,
}

impl CapturingNotifier {
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<ContactNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for CapturingNotifier {
    async fn notify(&self, notification: ContactNotification) -> ApplicationResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("smtp relay refused connection"));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}
