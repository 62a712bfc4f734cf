use crate::application::ports::session_revocation::SessionRevocationStore;
use crate::application::{ApplicationResult, error::ApplicationError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Process-local revocation list. Revocations are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

impl InMemorySessionRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ApplicationError {
    ApplicationError::infrastructure("session store lock poisoned")
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().map_err(poisoned)?;
        Ok(guard.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().map_err(poisoned)?;
        guard.insert(session_id.to_string());
        Ok(())
    }
}
