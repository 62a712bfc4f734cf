// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId, PostSlug, PostTags, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub slug: PostSlug,
    pub tags: PostTags,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.published = published;
        self.updated_at = now;
    }

    pub fn set_content(&mut self, title: PostTitle, content: PostContent, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = now;
    }

    pub fn set_tags(&mut self, tags: PostTags, now: DateTime<Utc>) {
        self.tags = tags;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub slug: PostSlug,
    pub tags: PostTags,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub slug: Option<PostSlug>,
    pub tags: Option<PostTags>,
    pub published: Option<bool>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            slug: None,
            tags: None,
            published: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_tags(mut self, tags: PostTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.slug.is_none()
            && self.tags.is_none()
            && self.published.is_none()
    }
}

/// Read-side filter; results are always ordered newest first.
#[derive(Debug, Clone, Default)]
pub struct PostListFilter {
    pub include_drafts: bool,
    pub tag: Option<String>,
    pub limit: u32,
}
