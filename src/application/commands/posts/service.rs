// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{commands::crosspost::CrosspostCommandService, ports::time::Clock},
    domain::{
        activity::ActivityRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
    },
};

/// Slug assignment plus write attempts before a unique-constraint race is
/// reported as a conflict.
pub const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) activity_repo: Arc<dyn ActivityRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) crosspost: Arc<CrosspostCommandService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
        slug_service: Arc<PostSlugService>,
        crosspost: Arc<CrosspostCommandService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            activity_repo,
            slug_service,
            crosspost,
            clock,
        }
    }
}
