//! Wall-clock time handling.
//!
//! Timetables give times as "HH:MM" strings with no date attached. This
//! module provides a validated time-of-day type with minute-granularity
//! arithmetic and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::InvalidArgument;

const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_HOUR: u32 = 60;

/// A time of day with minute precision.
///
/// Hours are always in `0..24` and minutes in `0..60`; there is no way to
/// obtain a `Time` outside that range. Times carry no date, so arithmetic
/// is plain integer arithmetic on minutes since midnight and never wraps.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Time;
///
/// let time = Time::new(14, 30).unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// assert_eq!(time.as_minutes(), 870);
///
/// assert!(Time::new(24, 0).is_err());
/// assert!(Time::new(0, 60).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TimeRepr", into = "String")]
pub struct Time {
    hours: u8,
    minutes: u8,
}

impl Time {
    /// `00:00`.
    pub const MIDNIGHT: Time = Time {
        hours: 0,
        minutes: 0,
    };

    /// Create a time from hours and minutes.
    ///
    /// Fails if `hours` is not in `0..24` or `minutes` is not in `0..60`.
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidArgument> {
        if hours >= HOURS_PER_DAY {
            return Err(InvalidArgument::out_of_range("hours", hours, "0..24"));
        }
        if minutes >= MINUTES_PER_HOUR {
            return Err(InvalidArgument::out_of_range("minutes", minutes, "0..60"));
        }

        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
        })
    }

    /// Create a time from a count of minutes since midnight.
    ///
    /// Negative counts are rejected, as are counts of a full day or more
    /// (those decompose to an hour of 24 or above).
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_planner::domain::Time;
    ///
    /// let time = Time::from_minutes(125).unwrap();
    /// assert_eq!((time.hours(), time.minutes()), (2, 5));
    ///
    /// assert!(Time::from_minutes(-1).is_err());
    /// assert!(Time::from_minutes(24 * 60).is_err());
    /// ```
    pub fn from_minutes(total: i64) -> Result<Self, InvalidArgument> {
        if total < 0 {
            return Err(InvalidArgument::new(format!(
                "total minutes must not be negative, got {total}"
            )));
        }

        Self::from_signed(total / 60, total % 60)
    }

    /// Validate signed hour/minute components.
    fn from_signed(hours: i64, minutes: i64) -> Result<Self, InvalidArgument> {
        let h = u32::try_from(hours)
            .map_err(|_| InvalidArgument::out_of_range("hours", hours, "0..24"))?;
        let m = u32::try_from(minutes)
            .map_err(|_| InvalidArgument::out_of_range("minutes", minutes, "0..60"))?;
        Self::new(h, m)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_planner::domain::Time;
    ///
    /// // Valid times
    /// assert!(Time::parse_hhmm("00:00").is_ok());
    /// assert!(Time::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(Time::parse_hhmm("1430").is_err());
    /// assert!(Time::parse_hhmm("14:3").is_err());
    /// assert!(Time::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, InvalidArgument> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(InvalidArgument::new(format!(
                "expected HH:MM format, got {s:?}"
            )));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(InvalidArgument::new(format!(
                "expected colon at position 2, got {s:?}"
            )));
        }

        let hours = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidArgument::new(format!("invalid hour digits in {s:?}")))?;
        let minutes = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidArgument::new(format!("invalid minute digits in {s:?}")))?;

        Self::new(hours, minutes)
    }

    /// Create a time from a chrono time, dropping seconds.
    ///
    /// Used to read the wall clock, e.g. `Local::now().time()`.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
        }
    }

    /// Returns the hour (0-23).
    pub fn hours(&self) -> u32 {
        u32::from(self.hours)
    }

    /// Returns the minute (0-59).
    pub fn minutes(&self) -> u32 {
        u32::from(self.minutes)
    }

    /// Returns the number of minutes since midnight (0-1439).
    pub fn as_minutes(&self) -> u32 {
        self.minutes() + MINUTES_PER_HOUR * self.hours()
    }

    /// Returns `self - other` in minutes.
    ///
    /// Negative if `self` is earlier than `other`. There is no wrap-around
    /// at midnight: `00:10` minus `23:50` is `-1420`.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_planner::domain::Time;
    ///
    /// let a = Time::new(8, 20).unwrap();
    /// let b = Time::new(8, 0).unwrap();
    /// assert_eq!(a.difference(&b), 20);
    /// assert_eq!(b.difference(&a), -20);
    /// ```
    pub fn difference(&self, other: &Time) -> i64 {
        i64::from(self.as_minutes()) - i64::from(other.as_minutes())
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_minutes().cmp(&other.as_minutes())
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({:02}:{:02})", self.hours, self.minutes)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for Time {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl From<Time> for String {
    fn from(time: Time) -> Self {
        time.to_string()
    }
}

/// Wire forms accepted for a time: "HH:MM" or `{"hours": h, "minutes": m}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeRepr {
    Text(String),
    Record { hours: i64, minutes: i64 },
}

impl TryFrom<TimeRepr> for Time {
    type Error = InvalidArgument;

    fn try_from(repr: TimeRepr) -> Result<Self, Self::Error> {
        match repr {
            TimeRepr::Text(s) => Time::parse_hhmm(&s),
            TimeRepr::Record { hours, minutes } => Time::from_signed(hours, minutes),
        }
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


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hours in 0u32..24, minutes in 0u32..60) -> Time {
            Time::new(hours, minutes).unwrap()
        }
    }

    proptest! {
        /// from_minutes then as_minutes returns the input
        #[test]
        fn from_minutes_roundtrip(m in 0i64..1440) {
            let t = Time::from_minutes(m).unwrap();
            prop_assert_eq!(i64::from(t.as_minutes()), m);
            prop_assert_eq!(i64::from(t.hours()), m / 60);
            prop_assert_eq!(i64::from(t.minutes()), m % 60);
        }

        /// Negative minute counts are always rejected
        #[test]
        fn from_minutes_negative_rejected(m in i64::MIN..0) {
            prop_assert!(Time::from_minutes(m).is_err());
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hours in 24u32.., minutes in 0u32..60) {
            prop_assert!(Time::new(hours, minutes).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hours in 0u32..24, minutes in 60u32..) {
            prop_assert!(Time::new(hours, minutes).is_err());
        }

        /// Difference is antisymmetric
        #[test]
        fn difference_antisymmetric(t1 in valid_time(), t2 in valid_time()) {
            prop_assert_eq!(t1.difference(&t2), -t2.difference(&t1));
        }

        /// Difference is consistent with ordering
        #[test]
        fn difference_ordering_consistent(t1 in valid_time(), t2 in valid_time()) {
            let diff = t2.difference(&t1);
            match t1.cmp(&t2) {
                Ordering::Less => prop_assert!(diff > 0),
                Ordering::Greater => prop_assert!(diff < 0),
                Ordering::Equal => prop_assert!(diff == 0),
            }
        }

        /// Display then parse roundtrips
        #[test]
        fn display_parse_roundtrip(t in valid_time()) {
            prop_assert_eq!(Time::parse_hhmm(&t.to_string()).unwrap(), t);
        }

        /// Serde roundtrips through the string form
        #[test]
        fn serde_roundtrip(t in valid_time()) {
            let json = serde_json::to_string(&t).unwrap();
            let back: Time = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, t);
        }

        /// Out-of-range HH:MM strings are rejected
        #[test]
        fn out_of_range_string_rejected(hours in 24u32..100, minutes in 0u32..100) {
            let s = format!("{:02}:{:02}", hours, minutes);
            prop_assert!(Time::parse_hhmm(&s).is_err());
        }
    }
}
