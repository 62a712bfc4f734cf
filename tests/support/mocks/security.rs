// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use folio_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use folio_core::domain::user::{Role, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

use super::time::FIXED_NOW;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";

/// Stores `hashed:<password>`.
pub struct FakePasswordHasher;

#[async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Opaque tokens backed by a lookup table. The admin (id 1) and editor (id 2)
/// tokens are always valid; `issue` adds new entries.
pub struct FakeTokenManager {
    tokens: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl Default for FakeTokenManager {
    fn default() -> Self {
        let tokens = HashMap::from([
            (
                ADMIN_TOKEN.to_string(),
                authenticated(1, "admin", Role::Admin, "admin-session"),
            ),
            (
                EDITOR_TOKEN.to_string(),
                authenticated(2, "editor", Role::Editor, "editor-session"),
            ),
        ]);
        Self {
            tokens: Mutex::new(tokens),
        }
    }
}

pub fn authenticated(id: i64, username: &str, role: Role, session_id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(id),
        username: username.to_string(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: *FIXED_NOW,
        expires_at: *FIXED_NOW + Duration::hours(1),
        session_id: session_id.to_string(),
    }
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let token = format!("issued-{}", subject.session_id);
        let user = AuthenticatedUser {
            id: subject.user_id,
            username: subject.username,
            role: subject.role,
            capabilities: subject.capabilities,
            issued_at: *FIXED_NOW,
            expires_at: *FIXED_NOW + Duration::hours(1),
            session_id: subject.session_id.clone(),
        };
        self.tokens.lock().unwrap().insert(token.clone(), user);
        Ok(AuthTokenDto {
            token,
            issued_at: *FIXED_NOW,
            expires_at: *FIXED_NOW + Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.tokens
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}
