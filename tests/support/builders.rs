// tests/support/builders.rs
use folio_core::domain::post::{Post, PostContent, PostId, PostSlug, PostTags, PostTitle};

use super::mocks::FIXED_NOW;

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    tags: Vec<String>,
    published: bool,
}

impl PostBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: format!("post-{id}"),
            content: "Body".into(),
            tags: vec![],
            published: false,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            tags: PostTags::new(self.tags).unwrap(),
            published: self.published,
            created_at: *FIXED_NOW,
            updated_at: *FIXED_NOW,
        }
    }
}
