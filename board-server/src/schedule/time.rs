//! Departure time handling.
//!
//! The Comuline API provides estimated departure times as "HH:MM:SS"
//! strings. This module provides a validated time-of-day type for them.
//! Display output truncates the seconds, which is how the schedule view
//! presents times.

use chrono::NaiveTime;
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day for a scheduled departure.
///
/// Parsed from "HH:MM:SS" (24-hour, zero-padded). This type guarantees
/// that any value is a valid time of day by construction. There is no
/// date component: the upstream schedule is a daily timetable, and
/// comparisons against the wall clock are same-day only.
///
/// # Examples
///
/// ```
/// use board_server::schedule::DepartureTime;
///
/// let time = DepartureTime::parse("08:15:30").unwrap();
/// assert_eq!(time.to_string(), "08:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartureTime {
    time: NaiveTime,
}

impl DepartureTime {
    /// Parse a time from "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::schedule::DepartureTime;
    ///
    /// // Valid times
    /// assert!(DepartureTime::parse("00:00:00").is_ok());
    /// assert!(DepartureTime::parse("23:59:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(DepartureTime::parse("08:15").is_err());
    /// assert!(DepartureTime::parse("8:15:30").is_err());
    /// assert!(DepartureTime::parse("25:00:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        // Check colon positions
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Returns the time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Whether this departure is strictly later than `now`.
    ///
    /// The comparison is same-day only: a departure earlier in the day
    /// than `now` has already left, with no rollover to tomorrow.
    pub fn is_after(&self, now: NaiveTime) -> bool {
        self.time > now
    }
}

impl Ord for DepartureTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl PartialOrd for DepartureTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({})", self.time.format("%H:%M:%S"))
    }
}

impl fmt::Display for DepartureTime {
    /// Renders as "HH:MM", truncating the seconds. No rounding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M"))
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
