use super::CrosspostCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CrosspostConnectionDto},
        error::ApplicationResult,
    },
    domain::crosspost::{AccessToken, CrosspostCredential},
};

pub struct SaveCrosspostCredentialCommand {
    pub access_token: String,
}

impl CrosspostCommandService {
    /// Store (or replace) the caller's token for the external platform.
    pub async fn save_credential(
        &self,
        actor: &AuthenticatedUser,
        command: SaveCrosspostCredentialCommand,
    ) -> ApplicationResult<CrosspostConnectionDto> {
        ensure_capability(actor, "crosspost", "manage")?;

        let credential = CrosspostCredential {
            user_id: actor.id,
            access_token: AccessToken::new(command.access_token)?,
            updated_at: self.clock.now(),
        };
        let saved = self.credential_repo.upsert(credential).await?;
        tracing::info!(user_id = actor.id.0, "cross-post credential saved");

        Ok(CrosspostConnectionDto {
            connected: true,
            updated_at: Some(saved.updated_at),
        })
    }

    pub async fn connection_status(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<CrosspostConnectionDto> {
        ensure_capability(actor, "crosspost", "manage")?;

        let credential = self.credential_repo.find_by_user(actor.id).await?;
        Ok(CrosspostConnectionDto {
            connected: credential.is_some(),
            updated_at: credential.map(|c| c.updated_at),
        })
    }
}
