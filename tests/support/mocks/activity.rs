// tests/support/mocks/activity.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::domain::activity::{
    ActivityEvent, ActivityId, ActivityKind, ActivityRepository, NewActivityEvent,
};
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::post::PostId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct InMemoryActivity {
    events: Mutex<Vec<ActivityEvent>>,
    fail_writes: AtomicBool,
}

impl InMemoryActivity {
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Store an event at an arbitrary instant, bypassing the clock.
    pub fn seed(&self, post_id: i64, kind: ActivityKind, created_at: &str) {
        let mut events = self.events.lock().unwrap();
        let id = ActivityId(i64::try_from(events.len()).unwrap() + 1);
        events.push(ActivityEvent {
            id,
            post_id: PostId(post_id),
            kind,
            created_at: DateTime::parse_from_rfc3339(created_at)
                .unwrap()
                .with_timezone(&Utc),
        });
    }

    pub fn kinds_for(&self, post_id: i64) -> Vec<ActivityKind> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.post_id.0 == post_id)
            .map(|e| e.kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivity {
    async fn record(&self, event: NewActivityEvent) -> DomainResult<ActivityEvent> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("activity table unavailable".into()));
        }
        let mut events = self.events.lock().unwrap();
        let stored = ActivityEvent {
            id: ActivityId(i64::try_from(events.len()).unwrap() + 1),
            post_id: event.post_id,
            kind: event.kind,
            created_at: event.created_at,
        };
        events.push(stored.clone());
        Ok(stored)
    }

    async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<ActivityEvent>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.created_at >= from && e.created_at < to)
            .cloned()
            .collect())
    }
}
