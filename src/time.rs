// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Minute-resolution 24-hour wall-clock time.
//!
//! [`Time`] stores a single minutes-since-midnight count in `[0, 1440)`.
//! All comparison and arithmetic operate on that count, so ordering is a
//! plain total order and `add`/`sub` wrap around midnight without ever
//! failing.  The canonical textual form is zero-padded `HH:MM`.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::Timelike;

use crate::dst::{FormatOptions, ParseOptions};
use crate::error::{Entity, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) const MINUTES_PER_HOUR: u16 = 60;
pub(crate) const HOURS_PER_DAY: u16 = 24;
pub(crate) const MINUTES_PER_DAY: u16 = MINUTES_PER_HOUR * HOURS_PER_DAY;

const SEPARATOR: char = ':';

// ═══════════════════════════════════════════════════════════════════════════
// Time
// ═══════════════════════════════════════════════════════════════════════════

/// A point within a day, at minute resolution.
///
/// `Time` is a `Copy` value object: every mutator returns a new instance and
/// no constructor can produce an out-of-range value — numeric inputs wrap
/// modulo 24 hours.
///
/// # Examples
///
/// ```
/// use weekgrid::Time;
///
/// let opening: Time = "09:30".parse()?;
/// assert_eq!(opening.hours(), 9);
/// assert_eq!(opening.minutes(), 30);
/// assert_eq!(opening.to_string(), "09:30");
/// # Ok::<(), weekgrid::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    /// Minutes since midnight, always `< 1440`.
    minutes_of_day: u16,
}

impl Time {
    // ── constructors ──────────────────────────────────────────────────

    /// Midnight, `00:00`.
    pub const MIDNIGHT: Time = Time { minutes_of_day: 0 };

    /// Create from hour and minute components, wrapping modulo 24 hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::Time;
    ///
    /// assert_eq!(Time::new(14, 35).to_string(), "14:35");
    /// assert_eq!(Time::new(24, 0), Time::new(0, 0));
    /// ```
    #[inline]
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self::from_minutes(hours as u32 * MINUTES_PER_HOUR as u32 + minutes as u32)
    }

    /// Create from a total minutes-since-midnight count, wrapping modulo
    /// 1440.
    #[inline]
    pub const fn from_minutes(total_minutes: u32) -> Self {
        Self {
            minutes_of_day: (total_minutes % MINUTES_PER_DAY as u32) as u16,
        }
    }

    /// The current UTC wall-clock hour and minute.
    pub fn now() -> Self {
        let now = chrono::Utc::now();
        Self::new(now.hour() as u8, now.minute() as u8)
    }

    /// Parse `HH:MM` applying the supplied DST options.
    ///
    /// Behaves exactly like the [`FromStr`] impl, then shifts the parsed
    /// hour forward by one (wrapping 24 to 0) when the options' reference
    /// moment observes DST.  See [`crate::dst`].
    pub fn parse_with(value: &str, options: &ParseOptions) -> Result<Self> {
        let parsed = Self::parse_canonical(value)?;
        if options.dst_shift() {
            Ok(parsed.add(MINUTES_PER_HOUR))
        } else {
            Ok(parsed)
        }
    }

    fn parse_canonical(value: &str) -> Result<Self> {
        let err = || Error::format(Entity::Time, value);

        let (raw_hours, raw_minutes) = value.split_once(SEPARATOR).ok_or_else(err)?;
        if raw_hours.len() != 2 || raw_minutes.len() != 2 {
            return Err(err());
        }
        if !raw_hours.bytes().all(|b| b.is_ascii_digit())
            || !raw_minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        // Two ASCII digits always fit in u8.
        let hours: u8 = raw_hours.parse().map_err(|_| err())?;
        let minutes: u8 = raw_minutes.parse().map_err(|_| err())?;

        if hours >= HOURS_PER_DAY as u8 || minutes >= MINUTES_PER_HOUR as u8 {
            return Err(err());
        }

        Ok(Self::new(hours, minutes))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Hour component, `0..=23`.
    #[inline]
    pub const fn hours(&self) -> u8 {
        (self.minutes_of_day / MINUTES_PER_HOUR) as u8
    }

    /// Minute component, `0..=59`.
    #[inline]
    pub const fn minutes(&self) -> u8 {
        (self.minutes_of_day % MINUTES_PER_HOUR) as u8
    }

    /// Total minutes since midnight, `0..1440`.
    #[inline]
    pub const fn minutes_of_day(&self) -> u16 {
        self.minutes_of_day
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Signed distance in minutes: positive when `self` is later than
    /// `that`, negative when earlier, zero when equal.
    #[inline]
    pub const fn compare_to(&self, that: &Time) -> i32 {
        self.minutes_of_day as i32 - that.minutes_of_day as i32
    }

    /// Whether `self` is strictly later in the day than `that`.
    #[inline]
    pub const fn is_after(&self, that: &Time) -> bool {
        self.compare_to(that) > 0
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Add minutes, wrapping past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::Time;
    ///
    /// assert_eq!(Time::new(23, 50).add(20), Time::new(0, 10));
    /// ```
    #[inline]
    pub const fn add(self, minutes: u16) -> Self {
        Self::from_minutes(self.minutes_of_day as u32 + minutes as u32)
    }

    /// Subtract minutes, wrapping before midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::Time;
    ///
    /// assert_eq!(Time::new(0, 10).sub(20), Time::new(23, 50));
    /// ```
    #[inline]
    pub const fn sub(self, minutes: u16) -> Self {
        let diff = self.minutes_of_day as i32 - minutes as i32;
        Self::from_minutes(diff.rem_euclid(MINUTES_PER_DAY as i32) as u32)
    }

    // ── serialisation ─────────────────────────────────────────────────

    /// Format as `HH:MM` applying the supplied DST options.
    ///
    /// The inverse of [`Time::parse_with`]: the hour is shifted back by one
    /// (wrapping 0 to 23) when the options' reference moment observes DST.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        let shifted = if options.dst_shift() {
            self.sub(MINUTES_PER_HOUR)
        } else {
            *self
        };
        shifted.to_string()
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{}{:02}", self.hours(), SEPARATOR, self.minutes())
    }
}

impl FromStr for Time {
    type Err = Error;

    /// Parse the canonical `HH:MM` form: exactly two zero-padded digit
    /// pairs separated by `:`, with `HH < 24` and `MM < 60`.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_canonical(s)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────

impl Add<u16> for Time {
    type Output = Self;

    #[inline]
    fn add(self, minutes: u16) -> Self::Output {
        Time::add(self, minutes)
    }
}

impl Sub<u16> for Time {
    type Output = Self;

    #[inline]
    fn sub(self, minutes: u16) -> Self::Output {
        Time::sub(self, minutes)
    }
}

impl Sub for Time {
    type Output = i32;

    /// Signed distance in minutes, same as [`Time::compare_to`].
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.compare_to(&rhs)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Time", 2)?;
        s.serialize_field("hours", &self.hours())?;
        s.serialize_field("minutes", &self.minutes())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            hours: u8,
            minutes: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.hours >= HOURS_PER_DAY as u8 || raw.minutes >= MINUTES_PER_HOUR as u8 {
            return Err(serde::de::Error::custom(format!(
                "time components out of range: {}h {}m",
                raw.hours, raw.minutes
            )));
        }
        Ok(Self::new(raw.hours, raw.minutes))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for text in ["00:00", "09:30", "14:35", "23:59"] {
            let time: Time = text.parse().unwrap();
            assert_eq!(time.to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_malformed() {
        for text in [
            "24:00", "12:60", "12", ":00", "1:30", "12:3", "", "ab:cd", "+1:30", "12-30",
            "12:30:00",
        ] {
            let parsed = text.parse::<Time>();
            assert!(
                matches!(
                    parsed,
                    Err(Error::InvalidFormat {
                        entity: Entity::Time,
                        ..
                    })
                ),
                "`{text}` parsed to {parsed:?}"
            );
        }
    }

    #[test]
    fn test_constructor_wraps_modulo_day() {
        assert_eq!(Time::new(24, 0), Time::MIDNIGHT);
        assert_eq!(Time::new(25, 30), Time::new(1, 30));
        assert_eq!(Time::from_minutes(1440), Time::MIDNIGHT);
        assert_eq!(Time::from_minutes(1441), Time::new(0, 1));
    }

    #[test]
    fn test_add_wraps_past_midnight() {
        assert_eq!(Time::new(10, 0).add(90), Time::new(11, 30));
        assert_eq!(Time::new(23, 30).add(45), Time::new(0, 15));
        assert_eq!(Time::new(0, 0).add(1440), Time::new(0, 0));
    }

    #[test]
    fn test_sub_wraps_before_midnight() {
        assert_eq!(Time::new(10, 0).sub(90), Time::new(8, 30));
        assert_eq!(Time::new(0, 15).sub(45), Time::new(23, 30));
        assert_eq!(Time::new(0, 0).sub(1440), Time::new(0, 0));
    }

    #[test]
    fn test_operator_impls_match_methods() {
        let time = Time::new(9, 15);
        assert_eq!(time + 30, time.add(30));
        assert_eq!(time - 30, time.sub(30));
        assert_eq!(Time::new(10, 0) - Time::new(9, 0), 60);
        assert_eq!(Time::new(9, 0) - Time::new(10, 0), -60);
    }

    #[test]
    fn test_ordering_is_total() {
        let a = Time::new(9, 0);
        let b = Time::new(17, 30);
        let same = Time::new(9, 0);

        assert!(b.is_after(&a));
        assert!(!a.is_after(&b));
        assert!(!a.is_after(&same));
        assert_eq!(a, same);
        assert!(a < b);

        // exactly one of after / before / equal holds
        for (x, y) in [(a, b), (b, a), (a, same)] {
            let outcomes =
                [x.is_after(&y), y.is_after(&x), x == y].iter().filter(|&&o| o).count();
            assert_eq!(outcomes, 1);
        }
    }

    #[test]
    fn test_compare_to_is_minute_distance() {
        assert_eq!(Time::new(10, 30).compare_to(&Time::new(9, 0)), 90);
        assert_eq!(Time::new(9, 0).compare_to(&Time::new(10, 30)), -90);
        assert_eq!(Time::new(9, 0).compare_to(&Time::new(9, 0)), 0);
    }

    #[test]
    fn test_now_is_in_range() {
        let now = Time::now();
        assert!(now.hours() < 24);
        assert!(now.minutes() < 60);
    }

    #[test]
    fn test_default_parse_ignores_dst() {
        let plain: Time = "09:30".parse().unwrap();
        let with_default = Time::parse_with("09:30", &ParseOptions::default()).unwrap();
        assert_eq!(plain, with_default);
        assert_eq!(plain.format_with(&FormatOptions::default()), "09:30");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_validation() {
        let time = Time::new(14, 35);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, r#"{"hours":14,"minutes":35}"#);
        assert_eq!(serde_json::from_str::<Time>(&json).unwrap(), time);

        assert!(serde_json::from_str::<Time>(r#"{"hours":24,"minutes":0}"#).is_err());
        assert!(serde_json::from_str::<Time>(r#"{"hours":12,"minutes":60}"#).is_err());
    }
}
