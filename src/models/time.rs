//! Parsing helpers for the timestamp and date formats used on the wire.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::error::{Error, Result};

/// Parse an RFC 3339 / ISO-8601 timestamp, keeping its offset.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|source| Error::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}

/// Parse an RFC 3339 timestamp and normalise it to UTC.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(value).map(|dt| dt.with_timezone(&Utc))
}

/// Parse a calendar day in `yyyy-MM-dd` form.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| Error::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// Serde adapter for `HH:MM` wall-clock times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp_keeps_offset() {
        let dt = parse_timestamp("2024-06-10T18:00:00+02:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(dt.hour(), 18);
    }

    #[test]
    fn test_parse_utc_normalises() {
        let dt = parse_utc("2024-06-10T18:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 16);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("next tuesday").unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp { .. }));
        assert!(err.to_string().contains("next tuesday"));
    }

    #[test]
    fn test_parse_day() {
        let day = parse_day("2024-02-29").unwrap();
        assert_eq!((day.year(), day.month(), day.day()), (2024, 2, 29));
        assert!(matches!(
            parse_day("2023-02-29"),
            Err(Error::InvalidDate { .. })
        ));
    }
}
