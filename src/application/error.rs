// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failure of a use case. Domain errors pass through untouched so the HTTP
/// layer can tell a lost slug race from a generic conflict.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("not authenticated: {0}")]
    Unauthorized(String),

    #[error("not permitted: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// Mail relay, publisher, hasher or session store failed.
    #[error("{0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True when the caller can fix the request; false for storage and
    /// collaborator failures.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_)) => false,
            Self::Domain(_)
            | Self::Validation(_)
            | Self::Unauthorized(_)
            | Self::Forbidden(_)
            | Self::NotFound(_)
            | Self::Conflict(_) => true,
        }
    }
}
