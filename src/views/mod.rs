//! View-model derivation.
//!
//! Pure functions that turn task, session, event and resource collections
//! into display-ready aggregates. Nothing here mutates its input or fails:
//! empty collections yield empty or zero results.
//!
//! Time-dependent views take "now" as a `DateTime<FixedOffset>`. Calendar-day
//! comparisons (today, tomorrow, grid cells) are made in that offset.

mod badge;
mod calendar;
mod category;
mod filter;
mod resources;
mod sort;
mod study;
mod summary;
mod urgency;

pub use badge::*;
pub use calendar::*;
pub use category::*;
pub use filter::*;
pub use resources::*;
pub use sort::*;
pub use study::*;
pub use summary::*;
pub use urgency::*;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// The calendar day a UTC timestamp falls on in the given offset.
pub fn local_day(timestamp: &DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    timestamp.with_timezone(offset).date_naive()
}

/// `round(100 * part / whole)` capped at 100, or 0 when `whole` is not positive.
pub(crate) fn capped_percent(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0;
    }
    (100.0 * part / whole).round().clamp(0.0, 100.0) as u32
}

/// Case-insensitive substring test. An empty needle matches everything.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_capped_percent() {
        assert_eq!(capped_percent(1.0, 3.0), 33);
        assert_eq!(capped_percent(2.0, 3.0), 67);
        assert_eq!(capped_percent(8.0, 4.0), 100);
        assert_eq!(capped_percent(5.0, 0.0), 0);
    }

    #[test]
    fn test_local_day_crosses_midnight() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 10, 23, 30, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            local_day(&ts, &plus_two),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
        );
    }
}
