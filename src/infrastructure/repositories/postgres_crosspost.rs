use super::map_sqlx;
use crate::domain::crosspost::{AccessToken, CrosspostCredential, CrosspostCredentialRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCrosspostCredentialRepository {
    pool: PgPool,
}

impl PostgresCrosspostCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CredentialRow {
    user_id: i64,
    access_token: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CredentialRow> for CrosspostCredential {
    type Error = DomainError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(CrosspostCredential {
            user_id: UserId::new(row.user_id)?,
            access_token: AccessToken::new(row.access_token)?,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CrosspostCredentialRepository for PostgresCrosspostCredentialRepository {
    async fn upsert(&self, credential: CrosspostCredential) -> DomainResult<CrosspostCredential> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "INSERT INTO crosspost_credentials (user_id, access_token, updated_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id)
             DO UPDATE SET access_token = EXCLUDED.access_token, updated_at = EXCLUDED.updated_at
             RETURNING user_id, access_token, updated_at",
        )
        .bind(i64::from(credential.user_id))
        .bind(credential.access_token.expose())
        .bind(credential.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        CrosspostCredential::try_from(row)
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<CrosspostCredential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT user_id, access_token, updated_at FROM crosspost_credentials
             WHERE user_id = $1",
        )
        .bind(i64::from(user_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CrosspostCredential::try_from).transpose()
    }
}
