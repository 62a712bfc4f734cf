// tests/support/mocks/crosspost.rs
use async_trait::async_trait;
use folio_core::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::publisher::{ArticlePublisher, PublishRequest, PublishedArticle},
};
use folio_core::domain::crosspost::{CrosspostCredential, CrosspostCredentialRepository};
use folio_core::domain::errors::DomainResult;
use folio_core::domain::user::UserId;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct InMemoryCredentials {
    by_user: Mutex<HashMap<i64, CrosspostCredential>>,
}

#[async_trait]
impl CrosspostCredentialRepository for InMemoryCredentials {
    async fn upsert(&self, credential: CrosspostCredential) -> DomainResult<CrosspostCredential> {
        self.by_user
            .lock()
            .unwrap()
            .insert(credential.user_id.0, credential.clone());
        Ok(credential)
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<CrosspostCredential>> {
        Ok(self.by_user.lock().unwrap().get(&user_id.0).cloned())
    }
}

/// Captures publish calls as `(access_token, request)` pairs.
#[derive(Default)]
pub struct FakePublisher {
    calls: Mutex<Vec<(String, PublishRequest)>>,
    fail: AtomicBool,
}

impl FakePublisher {
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(String, PublishRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticlePublisher for FakePublisher {
    async fn publish(
        &self,
        access_token: &str,
        request: PublishRequest,
    ) -> ApplicationResult<PublishedArticle> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure(
                "qiita returned 401 Unauthorized: invalid token",
            ));
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push((access_token.to_string(), request));
        Ok(PublishedArticle {
            url: format!("https://qiita.com/folio/items/{}", calls.len()),
        })
    }
}
