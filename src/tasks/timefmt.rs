//! Time label rendering.
//!
//! Every timestamp is shown two ways: a coarse relative phrase ("5 minutes
//! ago", "in 2 days") and an absolute local date-time. The relative units
//! roll over at 60 seconds, 60 minutes, 24 hours, 30 days, and 12 months,
//! rounding at each step, matching the original labels.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert epoch milliseconds to a local date-time.
///
/// Out-of-range values clamp to the epoch.
#[must_use]
pub fn local_datetime(ms: i64) -> DateTime<Local> {
    DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::UNIX_EPOCH).with_timezone(&Local)
}

/// The local calendar date of a timestamp.
#[must_use]
pub fn local_date(ms: i64) -> NaiveDate {
    local_datetime(ms).date_naive()
}

/// Format a timestamp as an absolute local date-time string.
#[must_use]
pub fn format_date_time(ms: i64) -> String {
    local_datetime(ms).format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Format a timestamp relative to `now_ms`.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn relative_time(ms: i64, now_ms: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mut delta = ((ms - now_ms) as f64 / 1000.0).round();
    if delta.abs() < 60.0 {
        return phrase(delta as i64, "second", "seconds");
    }
    delta = (delta / 60.0).round();
    if delta.abs() < 60.0 {
        return phrase(delta as i64, "minute", "minutes");
    }
    delta = (delta / 60.0).round();
    if delta.abs() < 24.0 {
        return phrase(delta as i64, "hour", "hours");
    }
    delta = (delta / 24.0).round();
    if delta.abs() < 30.0 {
        return phrase(delta as i64, "day", "days");
    }
    let months = (delta / 30.0).round();
    if months.abs() < 12.0 {
        return phrase(months as i64, "month", "months");
    }
    let years = (months / 12.0).round();
    phrase(years as i64, "year", "years")
}

/// Render a signed magnitude as a past or future phrase.
fn phrase(n: i64, singular: &str, plural: &str) -> String {
    let magnitude = n.abs();
    let unit = if magnitude == 1 { singular } else { plural };
    match n.signum() {
        0 => "just now".to_string(),
        1 => format!("in {magnitude} {unit}"),
        _ => format!("{magnitude} {unit} ago"),
    }
}
