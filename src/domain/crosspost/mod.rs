// src/domain/crosspost/mod.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

/// Access token for the external article platform. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("access token cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Debug, Clone)]
pub struct CrosspostCredential {
    pub user_id: UserId,
    pub access_token: AccessToken,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait CrosspostCredentialRepository: Send + Sync {
    async fn upsert(&self, credential: CrosspostCredential) -> DomainResult<CrosspostCredential>;
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<CrosspostCredential>>;
}
