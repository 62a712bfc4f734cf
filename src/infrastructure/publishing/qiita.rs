// src/infrastructure/publishing/qiita.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::publisher::{ArticlePublisher, PublishRequest, PublishedArticle},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://qiita.com/api/v2";
/// Qiita rejects items with more than five tags.
pub const MAX_TAGS: usize = 5;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ItemPayload<'a> {
    title: &'a str,
    body: &'a str,
    private: bool,
    tags: Vec<TagPayload<'a>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TagPayload<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ItemResponse {
    url: String,
}

impl<'a> ItemPayload<'a> {
    fn from_request(request: &'a PublishRequest) -> Self {
        Self {
            title: &request.title,
            body: &request.body,
            private: request.private,
            tags: request
                .tags
                .iter()
                .take(MAX_TAGS)
                .map(|name| TagPayload { name })
                .collect(),
        }
    }
}

#[derive(Clone)]
pub struct QiitaPublisher {
    client: Client,
    api_base: String,
}

impl QiitaPublisher {
    pub fn new(api_base: impl Into<String>) -> ApplicationResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.api_base)
    }
}

#[async_trait]
impl ArticlePublisher for QiitaPublisher {
    async fn publish(
        &self,
        access_token: &str,
        request: PublishRequest,
    ) -> ApplicationResult<PublishedArticle> {
        if request.tags.is_empty() {
            return Err(ApplicationError::validation("Qiita requires at least one tag"));
        }

        let response = self
            .client
            .post(self.items_url())
            .bearer_auth(access_token)
            .json(&ItemPayload::from_request(&request))
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("qiita request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApplicationError::infrastructure(format!(
                "qiita rejected the item ({status}): {detail}"
            )));
        }

        let item: ItemResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("unexpected qiita response: {err}")))?;
        Ok(PublishedArticle { url: item.url })
    }
}
