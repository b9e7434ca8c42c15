use chrono::{Local, TimeZone, Timelike};

use super::parse::parse_timestamp;
use crate::error::{FormatError, Result};

/// Format a media duration in seconds as `MM:SS`, or `HH:MM:SS` once it
/// reaches an hour.
///
/// The seconds field is rounded up, so fractional input never displays
/// shorter than it is.
pub fn second_to_time(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(FormatError::InvalidInput(format!(
            "duration must be a non-negative number of seconds, got {seconds}"
        )));
    }

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).ceil() as u64;

    if hours == 0 {
        Ok(format!("{minutes:02}:{secs:02}"))
    } else {
        Ok(format!("{hours:02}:{minutes:02}:{secs:02}"))
    }
}

/// Wall-clock `HH:MM` of a timestamp in the local zone.
pub fn clock_time(timestamp: &str) -> Result<String> {
    clock_time_in(timestamp, &Local)
}

pub fn clock_time_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Result<String> {
    let dt = parse_timestamp(timestamp, tz)?;
    Ok(format!("{:02}:{:02}", dt.hour(), dt.minute()))
}
