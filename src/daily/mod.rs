//! Date-pattern recognition and calendar logic for daily notes.
//!
//! This module contains the pure date logic the pipeline is built on: which
//! basenames count as daily notes, which folder names count as monthly
//! folders, parsing a basename into a calendar date, and deriving the
//! ISO-week label for the weekly review link. No I/O and no host types.

use crate::constants::DATE_FORMAT_ISO;
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static DAILY_NOTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid daily note regex"));
static MONTH_FOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid month folder regex"));

/// Returns true when `basename` has the exact `YYYY-MM-DD` shape.
///
/// Purely syntactic; `2025-13-99` passes here and is rejected later by
/// [`parse_daily_date`]. The anchored match keeps suffixed captures like
/// `2025-07-25 meeting` out of the navigation collection.
pub fn is_daily_basename(basename: &str) -> bool {
    DAILY_NOTE_RE.is_match(basename)
}

/// Returns true when `name` has the `YYYY-MM` monthly-folder shape.
pub fn is_month_folder(name: &str) -> bool {
    MONTH_FOLDER_RE.is_match(name)
}

/// Parses a daily note basename into its calendar date.
///
/// Returns `None` when the basename is not in `YYYY-MM-DD` form or names an
/// impossible date. The regex gate matters because chrono alone would also
/// accept unpadded fields like `2025-7-5`.
///
/// # Examples
///
/// ```
/// use daylink::daily::parse_daily_date;
/// use chrono::NaiveDate;
///
/// let date = parse_daily_date("2025-07-25");
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 25));
///
/// assert_eq!(parse_daily_date("2025-7-5"), None);
/// assert_eq!(parse_daily_date("2025-02-30"), None);
/// ```
pub fn parse_daily_date(basename: &str) -> Option<NaiveDate> {
    if !is_daily_basename(basename) {
        return None;
    }
    NaiveDate::parse_from_str(basename, DATE_FORMAT_ISO).ok()
}

/// Returns true when `candidate` is exactly `offset_days` calendar days
/// away from `current`.
///
/// Used for the "Yesterday"/"Tomorrow" labels; month and year boundaries
/// are handled by chrono, not by digit arithmetic.
pub fn is_days_offset(current: NaiveDate, candidate: NaiveDate, offset_days: i64) -> bool {
    current + Duration::days(offset_days) == candidate
}

/// Derives the weekly review note name (`YYYY-W##`) for a date.
///
/// Uses the ISO week date, so the year component is the ISO year: the last
/// days of December can belong to week 1 of the next year and the first
/// days of January to week 52/53 of the previous one.
///
/// # Examples
///
/// ```
/// use daylink::daily::weekly_note_name;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
/// assert_eq!(weekly_note_name(date), "2025-W30");
/// ```
pub fn weekly_note_name(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}
