use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revoke the session carried by the caller's token.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.session_revocation_store
            .revoke(&actor.session_id)
            .await?;
        tracing::info!(user_id = actor.id.0, session_id = %actor.session_id, "session revoked");
        Ok(())
    }
}
