// src/application/ports/publisher.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub title: String,
    /// Markdown body.
    pub body: String,
    pub tags: Vec<String>,
    pub private: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArticle {
    /// Canonical URL on the external platform.
    pub url: String,
}

/// Third-party article platform that mirrors posts.
#[async_trait]
pub trait ArticlePublisher: Send + Sync {
    async fn publish(
        &self,
        access_token: &str,
        request: PublishRequest,
    ) -> ApplicationResult<PublishedArticle>;
}
