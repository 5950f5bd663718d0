//! Duration and timestamp formatting for display.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::error::{Error, Result};

const MILLISECONDS_IN_A_SECOND: u64 = 1000;
const MILLISECONDS_IN_A_MINUTE: u64 = 60 * MILLISECONDS_IN_A_SECOND;

/// Format a duration in milliseconds as `MM:SS.mmm`.
///
/// Minutes are not wrapped at 60 and grow past two digits as needed.
///
/// # Example
/// ```
/// use drishti_view::time::milliseconds_to_time;
///
/// assert_eq!(milliseconds_to_time(61005), "01:01.005");
/// assert_eq!(milliseconds_to_time(6_000_000), "100:00.000");
/// ```
pub fn milliseconds_to_time(duration_ms: u64) -> String {
    let milliseconds = duration_ms % MILLISECONDS_IN_A_SECOND;
    let seconds = (duration_ms / MILLISECONDS_IN_A_SECOND) % 60;
    let minutes = duration_ms / MILLISECONDS_IN_A_MINUTE;
    format!("{minutes:02}:{seconds:02}.{milliseconds:03}")
}

/// Format a [`Duration`] as `MM:SS.mmm`, dropping sub-millisecond precision.
pub fn duration_to_time(duration: Duration) -> String {
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    milliseconds_to_time(millis)
}

/// Format an epoch timestamp (ms) as `HH:MM:SS` in the host's local timezone.
///
/// With `show_milliseconds`, a `:mmm` field is appended. The result depends
/// on the local timezone of the machine; use [`format_timestamp_in`] for a
/// fixed zone.
pub fn timestamp_ms_to_time_string(timestamp_ms: i64, show_milliseconds: bool) -> Result<String> {
    format_timestamp_in(&Local, timestamp_ms, show_milliseconds)
}

/// Format an epoch timestamp (ms) as `HH:MM:SS[:mmm]` in timezone `tz`.
///
/// # Example
/// ```
/// use chrono::Utc;
/// use drishti_view::time::format_timestamp_in;
///
/// // 2021-01-01T13:04:05.007Z
/// let ts = 1_609_506_245_007;
/// assert_eq!(format_timestamp_in(&Utc, ts, false).unwrap(), "13:04:05");
/// assert_eq!(format_timestamp_in(&Utc, ts, true).unwrap(), "13:04:05:007");
/// ```
pub fn format_timestamp_in<Tz: TimeZone>(
    tz: &Tz,
    timestamp_ms: i64,
    show_milliseconds: bool,
) -> Result<String> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or(Error::TimestampOutOfRange(timestamp_ms))?;
    let date = utc.with_timezone(tz);

    let (hour, minute, second) = (date.hour(), date.minute(), date.second());
    let time_string = if show_milliseconds {
        // Leap-second nanos can exceed one second; keep the field at 3 digits
        let millis = (date.nanosecond() / 1_000_000) % 1000;
        format!("{hour:02}:{minute:02}:{second:02}:{millis:03}")
    } else {
        format!("{hour:02}:{minute:02}:{second:02}")
    };
    Ok(time_string)
}
