use crate::domain::errors::DomainError;
use crate::domain::post::PostId;
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivityId(pub i64);

impl From<ActivityId> for i64 {
    fn from(value: ActivityId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Publish,
    Update,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Publish => "publish",
            ActivityKind::Update => "update",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(ActivityKind::Publish),
            "update" => Ok(ActivityKind::Update),
            other => Err(DomainError::Validation(format!(
                "unknown activity kind '{other}'"
            ))),
        }
    }
}

/// A timestamped record of a publishing action. Never mutated once stored.
#[derive(Debug, Clone)]
pub struct ActivityEvent {
    pub id: ActivityId,
    pub post_id: PostId,
    pub kind: ActivityKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivityEvent {
    pub post_id: PostId,
    pub kind: ActivityKind,
    pub created_at: DateTime<Utc>,
}

impl NewActivityEvent {
    pub fn new(post_id: PostId, kind: ActivityKind, created_at: DateTime<Utc>) -> Self {
        Self {
            post_id,
            kind,
            created_at,
        }
    }
}
