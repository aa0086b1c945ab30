//! Shared utility functions for WQ crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

    /// Timestamp layouts accepted for the `Date` column, tried in order.
    /// `%.f` also matches a value without fractional seconds.
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    /// Date-only layouts accepted for the `Date` column, tried in order.
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Format a timestamp as "YYYY-MM-DD", or "YYYY-MM-DD HH:MM:SS" when it
    /// carries a time of day.
    pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
        if has_time_of_day(timestamp) {
            timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            format_date(&timestamp.date())
        }
    }

    /// Parse an observation timestamp in any of the supported layouts.
    ///
    /// Date-only values land on midnight. Timestamps with a `Z` or UTC
    /// offset (RFC 3339) are converted to UTC.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        for format in DATETIME_FORMATS {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(timestamp);
            }
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
            return Ok(timestamp.naive_utc());
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date.and_time(NaiveTime::MIN));
            }
        }
        anyhow::bail!("unrecognised date: {:?}", s)
    }

    /// Calendar month a date falls in, as (year, month).
    pub fn year_month(date: &NaiveDate) -> (i32, u32) {
        (date.year(), date.month())
    }

    /// True when the timestamp has a non-midnight time of day.
    pub fn has_time_of_day(timestamp: &NaiveDateTime) -> bool {
        timestamp.num_seconds_from_midnight() != 0
    }

}
