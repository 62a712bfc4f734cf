use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Post, PostReadRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Drafts are reported as missing to anyone without `posts:view:drafts`.
    pub(super) fn ensure_visible(
        actor: Option<&AuthenticatedUser>,
        post: &Post,
    ) -> ApplicationResult<()> {
        if post.published || actor.is_some_and(|a| a.has_capability("posts", "view:drafts")) {
            Ok(())
        } else {
            Err(ApplicationError::not_found("post not found"))
        }
    }
}
