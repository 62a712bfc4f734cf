use crate::domain::contact::Contact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    /// `unread` or `read`.
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.into(),
            name: contact.name.to_string(),
            email: contact.email.to_string(),
            message: contact.message.as_str().to_string(),
            status: contact.status.to_string(),
            created_at: contact.created_at,
        }
    }
}
