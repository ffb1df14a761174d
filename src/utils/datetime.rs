//! Date and time utility functions
//!
//! Thin wrappers over chrono for the calendar operations the app needs:
//! week ranges, day/week/hour offsets, same-day comparison and the
//! human-readable labels shown in the day strip and lists.
//!
//! Every offset function is total: when the result would leave chrono's
//! representable range the input is returned unchanged.

use crate::entities::WeekDay;
use chrono::format::StrftimeItems;
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Weekday};
use std::fmt::Write;

/// Standard date format used for config defaults and log headers
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DEFAULT_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Render a date with a user-supplied strftime format.
///
/// Returns `None` for unknown specifiers and for fields a plain date cannot
/// supply, such as `%H` or `%Z`.
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format_with_items(StrftimeItems::new(format))).ok()?;
    Some(out)
}

/// Render a local timestamp with a user-supplied strftime format
pub fn format_timestamp(timestamp: &DateTime<Local>, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format_with_items(StrftimeItems::new(format))).ok()?;
    Some(out)
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Midnight at the start of `date` in local time.
///
/// When local midnight does not exist (DST gap) the UTC interpretation is used.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// Two timestamps fall on the same local calendar day
pub fn is_same_day(lhs: &DateTime<Local>, rhs: &DateTime<Local>) -> bool {
    lhs.date_naive() == rhs.date_naive()
}

/// A timestamp falls on the given calendar day
pub fn is_on_day(timestamp: &DateTime<Local>, day: NaiveDate) -> bool {
    timestamp.date_naive() == day
}

/// Add (or subtract, for negative values) calendar days
pub fn add_days(date: DateTime<Local>, days: i64) -> DateTime<Local> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

/// Add (or subtract) whole weeks
pub fn add_weeks(date: DateTime<Local>, weeks: i64) -> DateTime<Local> {
    match weeks.checked_mul(7) {
        Some(days) => add_days(date, days),
        None => date,
    }
}

/// Add (or subtract) hours of elapsed time
pub fn add_hours(date: DateTime<Local>, hours: i64) -> DateTime<Local> {
    TimeDelta::try_hours(hours)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Add (or subtract) calendar days to a plain date
pub fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

/// The seven days (Monday first) of the week containing `date`
///
/// Days that would fall outside chrono's range are dropped, so the result
/// has exactly seven entries for any realistic date.
pub fn days_in_week(date: NaiveDate) -> Vec<NaiveDate> {
    let from_monday = u64::from(date.weekday().num_days_from_monday());
    let Some(monday) = date.checked_sub_days(Days::new(from_monday)) else {
        return vec![date];
    };

    (0..7).filter_map(|offset| monday.checked_add_days(Days::new(offset))).collect()
}

/// Week range containing `date`, as freshly identified week days
pub fn fetch_week(date: NaiveDate) -> Vec<WeekDay> {
    days_in_week(date).into_iter().map(WeekDay::new).collect()
}

/// Week range one week before the week containing `date`
pub fn previous_week(date: NaiveDate) -> Vec<WeekDay> {
    fetch_week(shift_date(date, -7))
}

/// Week range one week after the week containing `date`
pub fn next_week(date: NaiveDate) -> Vec<WeekDay> {
    fetch_week(shift_date(date, 7))
}

/// `count` consecutive days starting at `start`
pub fn day_window(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Format a date relative to `today` the way the day list shows it
///
/// # Arguments
/// * `date` - Date to describe
/// * `today` - Reference day
///
/// # Returns
/// * `String` - "today", "tomorrow", "next Friday", "in 12 days", "Jan 15", ...
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
