use crate::domain::activity::{ActivityLevel, ActivityRange, DailyCounts};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActivityDayDto {
    pub date: String,
    pub count: u32,
    /// Intensity bucket, 0 through 4.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityHeatmapDto {
    pub start: String,
    pub end: String,
    pub utc_offset_minutes: i32,
    pub total: u32,
    /// Only days with at least one event, keyed `YYYY-MM-DD`.
    pub counts: BTreeMap<String, u32>,
    /// Every day of the range in order, gaps filled with zero.
    pub days: Vec<ActivityDayDto>,
}

impl ActivityHeatmapDto {
    pub fn from_counts(range: &ActivityRange, counts: &DailyCounts) -> Self {
        let days = counts
            .fill(range.start, range.end)
            .into_iter()
            .map(|(date, count)| ActivityDayDto {
                date: date.format(DATE_FORMAT).to_string(),
                count,
                level: ActivityLevel::from_count(count).value(),
            })
            .collect();

        Self {
            start: range.start.format(DATE_FORMAT).to_string(),
            end: range.end.format(DATE_FORMAT).to_string(),
            utc_offset_minutes: range.offset.local_minus_utc() / 60,
            total: counts.total(),
            counts: counts
                .iter()
                .map(|(date, count)| (date.format(DATE_FORMAT).to_string(), count))
                .collect(),
            days,
        }
    }
}
