// src/application/queries/activity.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    application::{
        dto::ActivityHeatmapDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::activity::{ActivityRange, ActivityRepository, aggregate_by_day, offset_from_minutes},
};

/// Calendar dates are `YYYY-MM-DD` in the target timezone.
pub struct ActivityHeatmapQuery {
    pub start: String,
    pub end: String,
    pub utc_offset_minutes: Option<i32>,
}

pub struct ActivityQueryService {
    activity_repo: Arc<dyn ActivityRepository>,
    default_offset_minutes: i32,
}

impl ActivityQueryService {
    pub fn new(activity_repo: Arc<dyn ActivityRepository>, default_offset_minutes: i32) -> Self {
        Self {
            activity_repo,
            default_offset_minutes,
        }
    }

    pub async fn heatmap(&self, query: ActivityHeatmapQuery) -> ApplicationResult<ActivityHeatmapDto> {
        let offset =
            offset_from_minutes(query.utc_offset_minutes.unwrap_or(self.default_offset_minutes))?;
        let range = ActivityRange::new(
            parse_date("start", &query.start)?,
            parse_date("end", &query.end)?,
            offset,
        )?;

        let (from, to) = range.utc_bounds()?;
        let events = self.activity_repo.list_between(from, to).await?;
        let counts = aggregate_by_day(&events, offset);

        Ok(ActivityHeatmapDto::from_counts(&range, &counts))
    }
}

fn parse_date(field: &str, value: &str) -> ApplicationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApplicationError::validation(format!("{field} must be a YYYY-MM-DD date")))
}
