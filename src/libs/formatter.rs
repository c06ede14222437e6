//! Duration formatting for reports and exports.
//!
//! Every duration shown by punchlog uses the `HH:MM:SS` pattern:
//!
//! - hours are zero-padded to at least 2 digits and never wrap at 24
//! - minutes and seconds are always 2 digits
//! - sub-second remainders are dropped (floor division, no rounding)
//!
//! Because the format truncates instead of rounding, parsing a formatted
//! string gives back the exact number of whole seconds that went in. The daily
//! aggregation relies on that.
//!
//! ## Examples
//!
//! ```rust
//! use punchlog::libs::formatter::{format_duration, parse_duration};
//!
//! assert_eq!(format_duration(27_000_000).unwrap(), "07:30:00");
//! assert_eq!(parse_duration("07:30:00").unwrap(), 27_000_000);
//! assert!(format_duration(-1).is_err());
//! ```

use crate::libs::error::{PunchError, PunchResult};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Formats a millisecond count as `HH:MM:SS`.
///
/// Negative input is rejected with [`PunchError::InvalidDuration`] instead of
/// producing a string like `-1:-5:00`.
///
/// ```rust
/// use punchlog::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0).unwrap(), "00:00:00");
/// assert_eq!(format_duration(59_999).unwrap(), "00:00:59");
/// assert_eq!(format_duration(100 * 3_600_000).unwrap(), "100:00:00");
/// ```
pub fn format_duration(ms: i64) -> PunchResult<String> {
    if ms < 0 {
        return Err(PunchError::InvalidDuration(ms));
    }

    let hours = ms / MS_PER_HOUR;
    let mins = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let secs = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    Ok(format!("{:02}:{:02}:{:02}", hours, mins, secs))
}

/// Parses `HH:MM:SS` back into milliseconds.
///
/// Hours may have any number of digits; minutes and seconds must be below 60.
pub fn parse_duration(text: &str) -> PunchResult<i64> {
    let malformed = || PunchError::MalformedDuration(text.to_string());

    let mut parts = text.trim().split(':');
    let (Some(h), Some(m), Some(s), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let field = |part: &str| -> PunchResult<i64> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        part.parse::<i64>().map_err(|_| malformed())
    };

    let (hours, mins, secs) = (field(h)?, field(m)?, field(s)?);
    if mins >= 60 || secs >= 60 || m.len() != 2 || s.len() != 2 {
        return Err(malformed());
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|total| total.checked_add(mins * MS_PER_MINUTE + secs * MS_PER_SECOND))
        .ok_or_else(malformed)
}
