use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostListFilter,
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

#[derive(Default)]
pub struct ListPostsQuery {
    pub include_drafts: bool,
    pub tag: Option<String>,
    pub limit: Option<u32>,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<Vec<PostDto>> {
        let filter = Self::normalize_filter(actor, query)?;
        let posts = self.read_repo.list(filter).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    fn normalize_filter(
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<PostListFilter> {
        if query.include_drafts {
            let actor = actor.ok_or_else(|| {
                ApplicationError::unauthorized("authentication required for draft access")
            })?;
            if !actor.has_capability("posts", "view:drafts") {
                return Err(ApplicationError::forbidden(
                    "missing capability posts:view:drafts",
                ));
            }
        }

        let limit = match query.limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };
        let tag = query
            .tag
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty());

        Ok(PostListFilter {
            include_drafts: query.include_drafts,
            tag,
            limit,
        })
    }
}
