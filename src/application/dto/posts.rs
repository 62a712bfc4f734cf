use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{crosspost::CrosspostResultDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    /// Markdown source.
    pub content: String,
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            tags: post.tags.into_inner(),
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Saved post plus the outcome of the optional cross-post attempt.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostResultDto {
    pub post: PostDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crosspost: Option<CrosspostResultDto>,
}
