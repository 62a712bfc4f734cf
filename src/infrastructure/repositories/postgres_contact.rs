use super::map_sqlx;
use crate::domain::contact::{
    Contact, ContactEmail, ContactId, ContactMessage, ContactName, ContactRepository,
    ContactStatus, NewContact,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(Contact {
            id: ContactId::new(row.id)?,
            name: ContactName::new(row.name)?,
            email: ContactEmail::new(row.email)?,
            message: ContactMessage::new(row.message)?,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: NewContact) -> DomainResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            "INSERT INTO contacts (name, email, message, status, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, message, status, created_at",
        )
        .bind(contact.name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.message.as_str())
        .bind(ContactStatus::Unread.as_str())
        .bind(contact.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Contact::try_from(row)
    }

    async fn list(&self, status: Option<ContactStatus>) -> DomainResult<Vec<Contact>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            "SELECT id, name, email, message, status, created_at FROM contacts
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC",
        )
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Contact::try_from).collect()
    }

    async fn set_status(&self, id: ContactId, status: ContactStatus) -> DomainResult<Contact> {
        let row = sqlx::query_as::<_, ContactRow>(
            "UPDATE contacts SET status = $2 WHERE id = $1
             RETURNING id, name, email, message, status, created_at",
        )
        .bind(i64::from(id))
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("contact not found".into()))?;

        Contact::try_from(row)
    }
}
