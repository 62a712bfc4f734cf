// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use folio_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// 2024-03-10 21:00 in JST.
pub static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
});

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *FIXED_NOW
    }
}
