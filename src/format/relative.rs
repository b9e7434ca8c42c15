use chrono::{DateTime, Datelike, Local, TimeZone};
use tracing::trace;

use super::parse::parse_timestamp;
use crate::error::Result;
use crate::locale::Locale;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// How far a timestamp lies from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeBucket {
    /// Timestamp is after now.
    Future,
    /// Under a minute ago, after rounding.
    JustNow,
    /// Rounded minutes, 1 to 59.
    Minutes(i64),
    /// Whole hours, 0 to 23. Zero when the gap is between 59m30s and an hour.
    Hours(i64),
    /// A day or more ago.
    Absolute,
}

impl RelativeBucket {
    /// Minutes are rounded to nearest (halves up) while hours are truncated.
    pub fn classify<Tz: TimeZone>(t: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        let elapsed = now.timestamp_millis() - t.timestamp_millis();
        if elapsed < 0 {
            return RelativeBucket::Future;
        }

        let minutes = (elapsed + MS_PER_MINUTE / 2) / MS_PER_MINUTE;
        if minutes < 1 {
            return RelativeBucket::JustNow;
        }
        if minutes < 60 {
            return RelativeBucket::Minutes(minutes);
        }

        let hours = elapsed / MS_PER_HOUR;
        if hours < 24 {
            return RelativeBucket::Hours(hours);
        }

        RelativeBucket::Absolute
    }
}

/// Format a timestamp for display relative to the local clock.
///
/// Recent times become a phrase like "5 minutes ago"; anything a day or more
/// old, or in the future, is rendered as "9 January, 2024" in the local zone.
pub fn created_at(timestamp: &str, locale: Locale) -> Result<String> {
    created_at_at(timestamp, locale, Local::now())
}

/// Same as [`created_at`] with an explicit "now". Calendar fields and naive
/// timestamps are read in `now`'s time zone.
pub fn created_at_at<Tz: TimeZone>(
    timestamp: &str,
    locale: Locale,
    now: DateTime<Tz>,
) -> Result<String> {
    let t = parse_timestamp(timestamp, &now.timezone())?;
    let bucket = RelativeBucket::classify(&t, &now);
    trace!(timestamp, %locale, ?bucket, "Formatting timestamp");

    let out = match bucket {
        RelativeBucket::JustNow => locale.just_now().to_string(),
        RelativeBucket::Minutes(n) => format!("{}{}", n, locale.minutes_ago()),
        RelativeBucket::Hours(n) => format!("{}{}", n, locale.hours_ago()),
        RelativeBucket::Future | RelativeBucket::Absolute => absolute_date(&t, locale),
    };
    Ok(out)
}

/// "<day> <month name>, <year>" from the instant's own calendar fields.
pub fn absolute_date<Tz: TimeZone>(t: &DateTime<Tz>, locale: Locale) -> String {
    let month = locale.months()[t.month0() as usize];
    format!("{} {}, {}", t.day(), month, t.year())
}
