use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostListFilter, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

/// Writes must reject a duplicate slug with `DomainError::SlugTaken`.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>>;
}
