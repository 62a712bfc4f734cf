// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            contacts::ContactCommandService, crosspost::CrosspostCommandService,
            posts::PostCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            notifier::ContactNotifier,
            publisher::ArticlePublisher,
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            activity::ActivityQueryService, contacts::ContactQueryService,
            posts::PostQueryService, users::UserQueryService,
        },
    },
    domain::{
        activity::ActivityRepository,
        contact::ContactRepository,
        crosspost::CrosspostCredentialRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
        user::UserRepository,
    },
};

/// Every collaborator the application layer needs, constructed once at startup.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub post_write_repo: Arc<dyn PostWriteRepository>,
    pub post_read_repo: Arc<dyn PostReadRepository>,
    pub activity_repo: Arc<dyn ActivityRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub credential_repo: Arc<dyn CrosspostCredentialRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub session_revocation_store: Arc<dyn SessionRevocationStore>,
    pub notifier: Arc<dyn ContactNotifier>,
    pub publisher: Arc<dyn ArticlePublisher>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub activity_offset_minutes: i32,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub crosspost_commands: Arc<CrosspostCommandService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub contact_queries: Arc<ContactQueryService>,
    pub activity_queries: Arc<ActivityQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            user_repo,
            post_write_repo,
            post_read_repo,
            activity_repo,
            contact_repo,
            credential_repo,
            password_hasher,
            token_manager,
            session_revocation_store,
            notifier,
            publisher,
            clock,
            slugger,
            activity_offset_minutes,
        } = deps;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&session_revocation_store),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(user_repo, Arc::clone(&clock)));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            slugger,
        ));

        let crosspost_commands = Arc::new(CrosspostCommandService::new(
            credential_repo,
            Arc::clone(&post_read_repo),
            publisher,
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            post_write_repo,
            Arc::clone(&post_read_repo),
            Arc::clone(&activity_repo),
            slug_service,
            Arc::clone(&crosspost_commands),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(post_read_repo));

        let contact_commands = Arc::new(ContactCommandService::new(
            Arc::clone(&contact_repo),
            notifier,
            clock,
        ));
        let contact_queries = Arc::new(ContactQueryService::new(contact_repo));

        let activity_queries = Arc::new(ActivityQueryService::new(
            activity_repo,
            activity_offset_minutes,
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            crosspost_commands,
            contact_commands,
            contact_queries,
            activity_queries,
            token_manager,
            session_revocation_store,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn session_revocation_store(&self) -> Arc<dyn SessionRevocationStore> {
        Arc::clone(&self.session_revocation_store)
    }

    /// Verify a raw bearer token and reject sessions revoked by logout.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        if self
            .session_revocation_store
            .is_revoked(&user.session_id)
            .await?
        {
            return Err(ApplicationError::unauthorized("session revoked"));
        }
        Ok(user)
    }
}
