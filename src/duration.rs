//! Pure functions for formatting durations as clock strings
//!
//! Durations render as `MM:SS`, or `H:MM:SS` once they reach an hour.

use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Format a number of seconds as a clock string
///
/// # Arguments
///
/// * `seconds` - Optional duration in seconds, may be fractional
///
/// # Returns
///
/// `"00:00"` for a missing or zero duration, `MM:SS` below one hour and
/// `H:MM:SS` from one hour on. Fractional seconds are truncated.
///
/// # Examples
///
/// ```
/// use infogata_utils::format_seconds;
///
/// assert_eq!(format_seconds(Some(125.0)), "02:05");
/// assert_eq!(format_seconds(Some(3661.0)), "1:01:01");
/// assert_eq!(format_seconds(None), "00:00");
/// ```
pub fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        // Negative and non-finite inputs have no clock rendering.
        Some(secs) if secs.is_finite() && secs > 0.0 => format_whole_seconds(secs.trunc() as u64),
        _ => "00:00".to_string(),
    }
}

/// Format a [`Duration`] the same way as [`format_seconds`]
///
/// Sub-second precision is dropped.
pub fn format_duration(duration: Duration) -> String {
    format_whole_seconds(duration.as_secs())
}

fn format_whole_seconds(total: u64) -> String {
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
