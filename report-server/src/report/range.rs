//! Date range resolution
//!
//! Maps the admin panel's `date_filter` token (plus optional custom date
//! strings) to a concrete calendar window, and derives the
//! immediately-preceding comparison window of equal duration.

use chrono::{Datelike, Duration, NaiveDate};

use shared::models::DateWindow;

/// Recognized `date_filter` tokens
///
/// Anything unrecognized (or absent) resolves like `30days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    SevenDays,
    ThirtyDays,
    NinetyDays,
    /// Jan 1 of the current year through today
    Year,
    /// The whole previous calendar year
    LastYear,
    /// Caller-supplied start/end date strings
    Custom,
}

impl DateFilter {
    pub fn parse(token: Option<&str>) -> Self {
        match token.unwrap_or("") {
            "7days" => Self::SevenDays,
            "30days" => Self::ThirtyDays,
            "90days" => Self::NinetyDays,
            "year" => Self::Year,
            "last_year" => Self::LastYear,
            "custom" => Self::Custom,
            _ => Self::ThirtyDays,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7days",
            Self::ThirtyDays => "30days",
            Self::NinetyDays => "90days",
            Self::Year => "year",
            Self::LastYear => "last_year",
            Self::Custom => "custom",
        }
    }
}

/// Raw filter input as it arrives from the query string
#[derive(Debug, Clone, Default)]
pub struct RangeInput {
    pub filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl RangeInput {
    pub fn named(filter: &str) -> Self {
        Self {
            filter: Some(filter.to_string()),
            ..Self::default()
        }
    }

    pub fn custom(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            filter: Some("custom".to_string()),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }
}

/// Resolve the filter input into the current window, anchored on `today`
///
/// No `start <= end` validation is performed: an inverted custom range flows
/// through as an empty window and aggregates to zero downstream. An
/// unparseable custom date degrades the same way rather than erroring.
pub fn resolve_window(input: &RangeInput, today: NaiveDate) -> DateWindow {
    let filter = DateFilter::parse(input.filter.as_deref());
    match filter {
        DateFilter::SevenDays => days_back(today, 7),
        DateFilter::ThirtyDays => days_back(today, 30),
        DateFilter::NinetyDays => days_back(today, 90),
        DateFilter::Year => DateWindow::new(jan_first(today.year(), today), today),
        DateFilter::LastYear => {
            let year = today.year() - 1;
            let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
            DateWindow::new(jan_first(year, today), end)
        }
        DateFilter::Custom => {
            let start = match custom_date(input.start_date.as_deref()) {
                Ok(Some(date)) => date,
                Ok(None) => today - Duration::days(30),
                Err(raw) => {
                    tracing::warn!(start_date = %raw, "Unparseable custom start date, using empty window");
                    return degenerate(today);
                }
            };
            let end = match custom_date(input.end_date.as_deref()) {
                Ok(Some(date)) => date,
                Ok(None) => today,
                Err(raw) => {
                    tracing::warn!(end_date = %raw, "Unparseable custom end date, using empty window");
                    return degenerate(today);
                }
            };
            DateWindow::new(start, end)
        }
    }
}

/// Comparison window: same duration, immediately preceding
///
/// Both boundaries shift back by the window length in whole days, so a
/// single-day window compares against the previous day and
/// `previous.len_days() == current.len_days()` for every input, inverted
/// windows included.
pub fn previous_window(current: &DateWindow) -> DateWindow {
    let shift = Duration::days(current.len_days());
    DateWindow::new(current.start - shift, current.end - shift)
}

fn days_back(today: NaiveDate, n: i64) -> DateWindow {
    DateWindow::new(today - Duration::days(n), today)
}

fn jan_first(year: i32, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(fallback)
}

/// `Ok(None)` for absent/empty input, `Err(raw)` for an unparseable string
fn custom_date(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| s.to_string()),
    }
}

/// Deterministic empty window (start one day past end)
fn degenerate(today: NaiveDate) -> DateWindow {
    DateWindow::new(today, today - Duration::days(1))
}
