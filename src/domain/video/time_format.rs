// SPDX-License-Identifier: MPL-2.0
//! Timestamp formatting for the duration display.

/// Formats seconds as `M:SS`, or `H:MM:SS` once the value reaches an hour.
///
/// Minutes are not zero-padded below an hour. Unknown or negative values
/// (`NaN` before metadata loads) render as `0:00`.
///
/// # Examples
///
/// ```
/// use iced_reel::domain::video::format_duration;
///
/// assert_eq!(format_duration(65.0), "1:05");
/// assert_eq!(format_duration(3725.0), "1:02:05");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = total_secs % 60;

    if hours == 0 {
        format!("{minutes}:{secs:02}")
    } else {
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_handles_zero() {
        assert_eq!(format_duration(0.0), "0:00");
    }

    #[test]
    fn format_handles_minutes() {
        assert_eq!(format_duration(65.0), "1:05");
        assert_eq!(format_duration(60.0), "1:00");
        assert_eq!(format_duration(599.9), "9:59");
    }

    #[test]
    fn format_handles_hours() {
        assert_eq!(format_duration(3725.0), "1:02:05");
        assert_eq!(format_duration(3600.0), "1:00:00");
    }

    #[test]
    fn format_truncates_fractional_seconds() {
        assert_eq!(format_duration(59.999), "0:59");
    }

    #[test]
    fn format_unknown_values_as_zero() {
        assert_eq!(format_duration(f64::NAN), "0:00");
        assert_eq!(format_duration(f64::INFINITY), "0:00");
        assert_eq!(format_duration(-10.0), "0:00");
    }
}
