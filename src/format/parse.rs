use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::trace;

use crate::error::{FormatError, Result};

/// Date-times carrying an explicit offset, tried after RFC 3339 and RFC 2822.
/// `%#z` takes `Z`, `+hh`, `+hhmm` and `+hh:mm`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Wall-clock date-times without an offset. These are read in the evaluation zone.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string into an instant expressed in `tz`.
///
/// Strings with an offset are converted into `tz`. Naive date-times are taken
/// as wall-clock time in `tz`, and a bare `YYYY-MM-DD` is midnight UTC.
pub fn parse_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(FormatError::InvalidInput("empty timestamp".to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(tz));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(tz));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            trace!(input = s, format = *fmt, "Parsed naive timestamp");
            return tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
                FormatError::InvalidInput(format!("{s} does not exist in the local time zone"))
            });
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| FormatError::InvalidInput(s.to_string()))?;
        return Ok(Utc.from_utc_datetime(&midnight).with_timezone(tz));
    }

    Err(FormatError::InvalidInput(format!("unrecognized timestamp: {s}")))
}
