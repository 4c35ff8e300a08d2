//! Slide visibility schedule.
//!
//! A slide carries an optional start/end calendar date (no time-of-day
//! component). `is_active` answers visibility for a single slide; the SQL
//! predicate from `active_filter_sql` expresses the same three-way logic for
//! bulk queries, and the two must agree on every input.

use chrono::NaiveDate;

/// Return true if a slide with the given date window is visible on `today`.
///
/// Rules:
/// 1. No dates set => visible.
/// 2. Only a start date => visible on/after the start date.
/// 3. Only an end date => visible through the end date.
/// 4. Both set => visible iff `start <= today <= end`.
pub fn is_active(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> bool {
    match (start, end) {
        (None, None) => true,
        (Some(start), None) => start <= today,
        (None, Some(end)) => today <= end,
        (Some(start), Some(end)) => start <= today && today <= end,
    }
}

/// Write-time correction for an inverted date window: when both dates are
/// set and the end precedes the start, the end is silently forced equal to
/// the start instead of being rejected. Applied on every slide write.
/// Inverted video clip offsets, in contrast, are a validation error.
pub fn clamp_end_date(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<NaiveDate> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Some(start),
        (_, end) => end,
    }
}

/// SQL predicate matching slides active on the date bound at `param`
/// (e.g. `"$2"`). Must stay equivalent to [`is_active`]: a NULL bound is
/// open-ended on that side.
pub fn active_filter_sql(param: &str) -> String {
    format!(
        "(start_date IS NULL OR start_date <= {param}) \
         AND (end_date IS NULL OR end_date >= {param})"
    )
}
