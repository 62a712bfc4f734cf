use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized("invalid credentials")
}

impl UserCommandService {
    /// Verify the password and open a new session.
    ///
    /// Unknown usernames, malformed usernames and wrong passwords all produce
    /// the same `invalid credentials` error.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .verify_credentials(command.username, &command.password)
            .await?;

        let session_id = Uuid::new_v4().to_string();
        let token = self
            .token_manager
            .issue(TokenSubject::for_session(&user, session_id))
            .await?;
        tracing::info!(user_id = user.id.0, session_id = %token.session_id, "session opened");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn verify_credentials(&self, username: String, password: &str) -> ApplicationResult<User> {
        let username = Username::new(username).map_err(|_| invalid_credentials())?;
        let Some(user) = self.user_repo.find_by_username(&username).await? else {
            tracing::debug!(username = %username, "login for unknown user");
            return Err(invalid_credentials());
        };

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => invalid_credentials(),
                other => other,
            })?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }
        Ok(user)
    }
}
