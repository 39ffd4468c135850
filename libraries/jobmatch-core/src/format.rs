//! Display formatting for salaries and relative timestamps.

use crate::error::{CoreError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Format an integer with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable salary range.
///
/// A bound of zero counts as missing.
pub fn format_salary(min: Option<u64>, max: Option<u64>) -> String {
    match (min.filter(|v| *v > 0), max.filter(|v| *v > 0)) {
        (Some(min), Some(max)) => format!("${} - ${}", group_thousands(min), group_thousands(max)),
        (Some(min), None) => format!("From ${}", group_thousands(min)),
        (None, Some(max)) => format!("Up to ${}", group_thousands(max)),
        (None, None) => "Salary not specified".to_string(),
    }
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS[.f]` datetime
/// (taken as UTC) or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(CoreError::InvalidTimestamp(input.to_string()))
}

/// Absolute distance between two instants in milliseconds.
fn distance_ms(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().abs()
}

/// Integer division rounding up; both operands are non-negative.
fn div_ceil(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

/// Relative time for the dashboard activity feed.
///
/// Hours are rounded up: anything short of a whole hour past zero already
/// reads as "1 hours ago".
pub fn format_activity_timestamp(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = div_ceil(distance_ms(timestamp, now), MS_PER_HOUR);
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    let days = div_ceil(hours, 24);
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Relative time for a job's posting date.
pub fn format_posted_date(posted: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = div_ceil(distance_ms(posted, now), MS_PER_DAY);
    if days == 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", div_ceil(days, 7))
    } else {
        format!("{} months ago", div_ceil(days, 30))
    }
}
