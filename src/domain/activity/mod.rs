pub mod aggregation;
pub mod entity;
pub mod repository;

pub use aggregation::{
    ActivityLevel, ActivityRange, DailyCounts, aggregate_by_day, offset_from_minutes,
};
pub use entity::{ActivityEvent, ActivityId, ActivityKind, NewActivityEvent};
pub use repository::ActivityRepository;
