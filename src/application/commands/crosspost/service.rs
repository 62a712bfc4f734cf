use std::sync::Arc;

use crate::{
    application::ports::{publisher::ArticlePublisher, time::Clock},
    domain::{crosspost::CrosspostCredentialRepository, post::PostReadRepository},
};

pub struct CrosspostCommandService {
    pub(super) credential_repo: Arc<dyn CrosspostCredentialRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) publisher: Arc<dyn ArticlePublisher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CrosspostCommandService {
    pub fn new(
        credential_repo: Arc<dyn CrosspostCredentialRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        publisher: Arc<dyn ArticlePublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            credential_repo,
            post_repo,
            publisher,
            clock,
        }
    }
}
