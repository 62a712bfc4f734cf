use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::ApplicationResult,
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct BootstrapAdminCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created,
    /// Users already exist; nothing was written.
    Skipped,
}

impl UserCommandService {
    /// Create the first admin account when the user table is empty.
    pub async fn bootstrap_admin(
        &self,
        command: BootstrapAdminCommand,
    ) -> ApplicationResult<BootstrapOutcome> {
        if self.user_repo.has_users().await? {
            return Ok(BootstrapOutcome::Skipped);
        }

        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::admin(username, PasswordHash::new(hashed)?, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = user.id.0, username = %user.username, "bootstrap admin created");
        Ok(BootstrapOutcome::Created)
    }
}
