//! Time utilities — business timezone conversion
//!
//! All date → timestamp conversion happens at the report layer; the store
//! boundary only ever sees `i64` Unix millis.

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use shared::error::AppError;

use super::AppResult;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's calendar date in the business timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Date + time → Unix millis in the business timezone
///
/// DST gap fallback: if the local time does not exist (spring-forward),
/// fall back to interpreting it as UTC.
pub fn date_time_to_millis(date: NaiveDate, time: NaiveTime, tz: Tz) -> i64 {
    let naive = date.and_time(time);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) → Unix millis in the business timezone
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_time_to_millis(date, NaiveTime::MIN, tz)
}

/// End of day → Unix millis of the following midnight (business timezone)
///
/// Callers use `< end` (exclusive) semantics, which makes the date itself
/// inclusive through 23:59:59.999.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_time_to_millis(next_day, NaiveTime::MIN, tz)
}

/// Unix millis → calendar date in the business timezone
///
/// Out-of-range timestamps collapse to the epoch date; the store never
/// produces them in practice.
pub fn millis_to_date(millis: i64, tz: Tz) -> NaiveDate {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&tz).date_naive())
        .unwrap_or_default()
}
