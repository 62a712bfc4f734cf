use crate::domain::user::{Capability, Role, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

use super::serde_time;

/// Bearer token handed to the console after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    #[schema(example = "En0KEwoEcG9zdHMKBmNyZWF0ZRgD...")]
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    /// Seconds until `expires_at`.
    pub expires_in: i64,
    /// Revoked on logout.
    pub session_id: String,
}

/// Caller resolved from a verified, unrevoked token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub session_id: String,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    /// `resource:action` strings in lexical order.
    pub fn capability_list(&self) -> Vec<String> {
        let mut list: Vec<String> = self.capabilities.iter().map(ToString::to_string).collect();
        list.sort_unstable();
        list
    }
}

/// Facts sealed into a new token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub session_id: String,
}

impl TokenSubject {
    /// Subject carrying the role's default capabilities for a fresh session.
    pub fn for_session(user: &User, session_id: String) -> Self {
        Self {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            session_id,
        }
    }
}
