//! Clock times for trip requests.
//!
//! Riders give a trip start time as "H:MM" or "HH:MM". The fare engine works
//! in plain minutes since midnight, so that is all this type stores.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

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

/// A time of day in minutes since midnight (0..1440).
///
/// # Examples
///
/// ```
/// use transit_planner::domain::MinuteOfDay;
///
/// let t = MinuteOfDay::parse_hhmm("9:30").unwrap();
/// assert_eq!(t.minutes(), 570);
/// assert_eq!(t.to_string(), "09:30");
///
/// assert!(MinuteOfDay::parse_hhmm("24:00").is_err());
/// assert!(MinuteOfDay::parse_hhmm("0930").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Midnight.
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    /// Creates a time from minutes since midnight, if in range.
    pub fn new(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes as u16))
    }

    /// Creates a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Self::new(hour * 60 + minute)
    }

    /// Parse "H:MM" or "HH:MM". Surrounding whitespace is ignored.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        let hour = parse_digits(hours).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute =
            parse_digits(minutes).ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns minutes since midnight.
    pub fn minutes(&self) -> u32 {
        u32::from(self.0)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }
}

impl From<NaiveTime> for MinuteOfDay {
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format an absolute minute count as a wall-clock "HH:MM", wrapping at
/// midnight. Window expiry times can run past the end of the day.
pub fn format_clock(minutes: u32) -> String {
    let wrapped = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Parse one or two ASCII digits.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(MinuteOfDay::parse_hhmm("00:00").unwrap().minutes(), 0);
        assert_eq!(MinuteOfDay::parse_hhmm("9:00").unwrap().minutes(), 540);
        assert_eq!(MinuteOfDay::parse_hhmm("09:20").unwrap().minutes(), 560);
        assert_eq!(MinuteOfDay::parse_hhmm("16:34").unwrap().minutes(), 994);
        assert_eq!(MinuteOfDay::parse_hhmm(" 23:59 ").unwrap().minutes(), 1439);
    }

    #[test]
    fn reject_bad_format() {
        assert!(MinuteOfDay::parse_hhmm("").is_err());
        assert!(MinuteOfDay::parse_hhmm("1430").is_err());
        assert!(MinuteOfDay::parse_hhmm("14:").is_err());
        assert!(MinuteOfDay::parse_hhmm(":30").is_err());
        assert!(MinuteOfDay::parse_hhmm("14:30:00").is_err());
        assert!(MinuteOfDay::parse_hhmm("ab:cd").is_err());
        assert!(MinuteOfDay::parse_hhmm("-1:30").is_err());
        assert!(MinuteOfDay::parse_hhmm("123:00").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            MinuteOfDay::parse_hhmm("24:00").unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
        assert_eq!(
            MinuteOfDay::parse_hhmm("12:60").unwrap_err().to_string(),
            "invalid time: minute must be 0-59"
        );
    }

    #[test]
    fn new_bounds() {
        assert!(MinuteOfDay::new(0).is_some());
        assert!(MinuteOfDay::new(1439).is_some());
        assert!(MinuteOfDay::new(1440).is_none());
        assert!(MinuteOfDay::from_hm(23, 59).is_some());
        assert!(MinuteOfDay::from_hm(24, 0).is_none());
    }

    #[test]
    fn display_pads() {
        assert_eq!(MinuteOfDay::new(5).unwrap().to_string(), "00:05");
        assert_eq!(MinuteOfDay::new(630).unwrap().to_string(), "10:30");
    }

    #[test]
    fn from_naive_time() {
        let t = NaiveTime::from_hms_opt(9, 20, 45).unwrap();
        assert_eq!(MinuteOfDay::from(t).minutes(), 560);
    }

    #[test]
    fn format_clock_wraps() {
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(1439 + 60), "00:59");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&MinuteOfDay::new(570).unwrap()).unwrap();
        assert_eq!(json, "\"09:30\"");
    }
}
