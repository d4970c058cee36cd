//! Uptime style duration formatting

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK};
use crate::error::FormatError;
use std::fmt::Write;

const UNITS: [(u64, char); 5] = [
    (SECONDS_PER_WEEK, 'w'),
    (SECONDS_PER_DAY, 'd'),
    (SECONDS_PER_HOUR, 'h'),
    (SECONDS_PER_MINUTE, 'm'),
    (1, 's'),
];

/// Format a number of seconds as `"Xw Yd Zh Am Bs"`.
///
/// A unit is written whenever the *total* reaches that unit's size, even if
/// its own share is zero: 90000 seconds is `"1d 1h 0m 0s"`. Zero seconds
/// yields an empty string.
pub fn format_duration(total_seconds: u64) -> Result<String, FormatError> {
    let mut out = String::new();
    out.try_reserve(32)?;

    let mut rest = total_seconds;
    for (size, suffix) in UNITS {
        let value = rest / size;
        rest %= size;
        if total_seconds >= size {
            if !out.is_empty() {
                out.push(' ');
            }
            write!(out, "{value}{suffix}")?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(secs: u64) -> String {
        format_duration(secs).unwrap()
    }

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(fmt(5), "5s");
        assert_eq!(fmt(65), "1m 5s");
        assert_eq!(fmt(60), "1m 0s");
    }

    #[test]
    fn test_zero_units_below_total_are_kept() {
        assert_eq!(fmt(90000), "1d 1h 0m 0s");
        assert_eq!(fmt(SECONDS_PER_HOUR), "1h 0m 0s");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(fmt(SECONDS_PER_WEEK * 3 + 2 * SECONDS_PER_DAY + 7), "3w 2d 0h 0m 7s");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(fmt(0), "");
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(fmt(123_456), fmt(123_456));
    }
}
