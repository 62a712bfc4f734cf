use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: GetPostBySlugQuery,
    ) -> ApplicationResult<PostDto> {
        // A malformed slug can never match a stored post.
        let slug = PostSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Self::ensure_visible(actor, &post)?;
        Ok(post.into())
    }
}
