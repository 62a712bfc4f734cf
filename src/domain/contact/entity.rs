use crate::domain::contact::value_objects::{
    ContactEmail, ContactId, ContactMessage, ContactName, ContactStatus,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
    pub created_at: DateTime<Utc>,
}
