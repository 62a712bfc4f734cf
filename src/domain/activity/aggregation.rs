// src/domain/activity/aggregation.rs
use super::entity::ActivityEvent;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeDelta, Utc};
use std::collections::BTreeMap;

/// Largest offset accepted from callers, in minutes (exclusive).
pub const MAX_OFFSET_MINUTES: i32 = 24 * 60;
pub const MAX_RANGE_DAYS: i64 = 366;

/// Whether `minutes` lies strictly inside one day either side of UTC.
pub fn is_valid_offset_minutes(minutes: i32) -> bool {
    minutes.unsigned_abs() < MAX_OFFSET_MINUTES.unsigned_abs()
}

/// Build a fixed offset from a minute count east of UTC.
pub fn offset_from_minutes(minutes: i32) -> DomainResult<FixedOffset> {
    if !is_valid_offset_minutes(minutes) {
        return Err(DomainError::Validation(format!(
            "utc offset must be within ±{} minutes",
            MAX_OFFSET_MINUTES - 1
        )));
    }
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| DomainError::Validation("invalid utc offset".into()))
}

/// Event counts per calendar day in a fixed target timezone.
///
/// Days without events are absent; use [`DailyCounts::fill`] to render a
/// contiguous range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCounts(BTreeMap<NaiveDate, u32>);

impl DailyCounts {
    pub fn get(&self, date: NaiveDate) -> u32 {
        self.0.get(&date).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.0.iter().map(|(date, count)| (*date, *count))
    }

    /// Every date in `[start, end]` paired with its count, zero for gaps.
    pub fn fill(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, u32)> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| (date, self.get(date)))
            .collect()
    }
}

/// Bucket events by the calendar date they fall on once shifted by `offset`.
///
/// Output is independent of input order. Events whose shifted timestamp
/// cannot be represented are skipped.
pub fn aggregate_by_day<'a, I>(events: I, offset: FixedOffset) -> DailyCounts
where
    I: IntoIterator<Item = &'a ActivityEvent>,
{
    let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    let mut counts = BTreeMap::new();

    for event in events {
        let Some(local) = event.created_at.naive_utc().checked_add_signed(shift) else {
            tracing::debug!(
                activity_id = event.id.0,
                created_at = %event.created_at,
                "skipping activity with unrepresentable local time"
            );
            continue;
        };
        *counts.entry(local.date()).or_insert(0) += 1;
    }

    DailyCounts(counts)
}

/// Heatmap intensity, 0 for no activity up to 4 for four or more events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ActivityLevel(u8);

impl ActivityLevel {
    pub const MAX: u8 = 4;

    pub fn from_count(count: u32) -> Self {
        Self(u8::try_from(count.min(u32::from(Self::MAX))).unwrap_or(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Inclusive calendar range in the target timezone, converted to half-open
/// UTC bounds for querying the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub offset: FixedOffset,
}

impl ActivityRange {
    pub fn new(start: NaiveDate, end: NaiveDate, offset: FixedOffset) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::Validation(
                "end date must not precede start date".into(),
            ));
        }
        if (end - start).num_days() >= MAX_RANGE_DAYS {
            return Err(DomainError::Validation(format!(
                "date range must not exceed {MAX_RANGE_DAYS} days"
            )));
        }
        Ok(Self { start, end, offset })
    }

    /// `[start 00:00 local, end + 1 day 00:00 local)` expressed in UTC.
    pub fn utc_bounds(&self) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
        let after_end = self
            .end
            .checked_add_days(Days::new(1))
            .ok_or_else(|| DomainError::Validation("end date out of range".into()))?;
        Ok((
            self.local_midnight_utc(self.start)?,
            self.local_midnight_utc(after_end)?,
        ))
    }

    fn local_midnight_utc(&self, date: NaiveDate) -> DomainResult<DateTime<Utc>> {
        let shift = TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        date.and_hms_opt(0, 0, 0)
            .and_then(|midnight| midnight.checked_sub_signed(shift))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| DomainError::Validation("date out of range".into()))
    }
}
