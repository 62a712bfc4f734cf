use super::PostCommandService;
use crate::domain::{
    activity::{ActivityKind, NewActivityEvent},
    post::Post,
};

impl PostCommandService {
    /// Activity is secondary to the post write; failures are only logged.
    pub(super) async fn record_activity(&self, post: &Post, kind: ActivityKind) {
        let event = NewActivityEvent::new(post.id, kind, post.updated_at);
        if let Err(err) = self.activity_repo.record(event).await {
            tracing::warn!(post_id = post.id.0, %kind, error = %err, "failed to record activity");
        }
    }
}
