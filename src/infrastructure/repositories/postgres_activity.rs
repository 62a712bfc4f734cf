use super::map_sqlx;
use crate::domain::activity::{
    ActivityEvent, ActivityId, ActivityKind, ActivityRepository, NewActivityEvent,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

/// Activity rows keep no foreign key to `posts`, so history survives deletes.
#[derive(Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    post_id: i64,
    kind: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityRow> for ActivityEvent {
    type Error = DomainError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        Ok(ActivityEvent {
            id: ActivityId(row.id),
            post_id: PostId::new(row.post_id)?,
            kind: row.kind.parse::<ActivityKind>()?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn record(&self, event: NewActivityEvent) -> DomainResult<ActivityEvent> {
        let row = sqlx::query_as::<_, ActivityRow>(
            "INSERT INTO activities (post_id, kind, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, post_id, kind, created_at",
        )
        .bind(i64::from(event.post_id))
        .bind(event.kind.as_str())
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ActivityEvent::try_from(row)
    }

    async fn list_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<ActivityEvent>> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, post_id, kind, created_at FROM activities
             WHERE created_at >= $1 AND created_at < $2
             ORDER BY created_at",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // A bad row must not sink the whole heatmap.
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                ActivityEvent::try_from(row)
                    .inspect_err(|err| tracing::warn!(activity_id = id, error = %err, "skipping malformed activity row"))
                    .ok()
            })
            .collect())
    }
}
