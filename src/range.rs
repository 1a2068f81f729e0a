// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Contiguous interval between two [`Time`] points.
//!
//! A [`TimeRange`] always has its start strictly before its end; the
//! invariant is enforced by every constructor and re-checked when
//! deserialising.  Ranges order lexicographically by `(start, end)` and the
//! canonical textual form is `HH:MM-HH:MM`.

use std::fmt;
use std::str::FromStr;

use crate::dst::{FormatOptions, ParseOptions};
use crate::error::{Entity, Error, Result};
use crate::time::Time;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = '-';

/// Width used when a range is synthesised from a lone start time.
const DEFAULT_RANGE_MINUTES: u16 = 5;

/// Values that can be tested for containment inside a [`TimeRange`].
///
/// Adapter trait implemented for [`Time`] (a point is contained when
/// `start <= t <= end`, inclusive on both endpoints) and [`TimeRange`]
/// (contained when fully nested, endpoints included).
pub trait RangeElement {
    /// Whether `self` lies entirely within `range`.
    fn contained_in(&self, range: &TimeRange) -> bool;
}

impl RangeElement for Time {
    #[inline]
    fn contained_in(&self, range: &TimeRange) -> bool {
        range.start <= *self && *self <= range.end
    }
}

impl RangeElement for TimeRange {
    #[inline]
    fn contained_in(&self, range: &TimeRange) -> bool {
        range.start <= self.start && self.end <= range.end
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeRange
// ═══════════════════════════════════════════════════════════════════════════

/// An interval `start-end` within a day, start strictly before end.
///
/// # Examples
///
/// ```
/// use weekgrid::{Time, TimeRange};
///
/// let shift: TimeRange = "09:00-17:30".parse()?;
/// assert_eq!(shift.duration(), 510);
/// assert!(shift.contains(&Time::new(12, 0)));
/// # Ok::<(), weekgrid::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: Time,
    end: Time,
}

impl TimeRange {
    // ── constructors ──────────────────────────────────────────────────

    /// Create a range from its two endpoints.
    ///
    /// Fails with [`Error::RangeOrder`] unless `start` is strictly before
    /// `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::{Time, TimeRange};
    ///
    /// let range = TimeRange::new(Time::new(10, 0), Time::new(12, 0))?;
    /// assert_eq!(range.to_string(), "10:00-12:00");
    ///
    /// assert!(TimeRange::new(Time::new(12, 0), Time::new(10, 0)).is_err());
    /// assert!(TimeRange::new(Time::new(12, 0), Time::new(12, 0)).is_err());
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    pub fn new(start: Time, end: Time) -> Result<Self> {
        if start >= end {
            return Err(Error::RangeOrder { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create a default-width range from a lone start time.
    ///
    /// The end is synthesised 5 minutes after the start.  Fails near
    /// midnight, where the synthesised end would wrap past `00:00`.
    pub fn from_start(start: Time) -> Result<Self> {
        Self::new(start, start.add(DEFAULT_RANGE_MINUTES))
    }

    /// Parse `HH:MM-HH:MM` applying the supplied DST options to both
    /// endpoints.
    pub fn parse_with(value: &str, options: &ParseOptions) -> Result<Self> {
        let segments: Vec<&str> = value.split(SEPARATOR).collect();
        let &[raw_start, raw_end] = segments.as_slice() else {
            return Err(Error::format(Entity::TimeRange, value));
        };

        let start = Time::parse_with(raw_start, options)?;
        let end = Time::parse_with(raw_end, options)?;

        Self::new(start, end)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Start of the range.
    #[inline]
    pub const fn start(&self) -> Time {
        self.start
    }

    /// End of the range.
    #[inline]
    pub const fn end(&self) -> Time {
        self.end
    }

    /// Length of the range in minutes, always positive.
    #[inline]
    pub const fn duration(&self) -> u16 {
        self.end.minutes_of_day() - self.start.minutes_of_day()
    }

    // ── slot counting ─────────────────────────────────────────────────

    /// Number of `slot_minutes`-sized steps that fit in `range`.
    ///
    /// Returns `0` — not an error — when the inputs cannot produce a valid
    /// slot series: the step is zero or not a multiple of 5, the range
    /// duration is not a multiple of 5, or the step is not strictly smaller
    /// than the duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::TimeRange;
    ///
    /// let range: TimeRange = "10:00-12:00".parse()?;
    /// assert_eq!(TimeRange::number_of_slots_in_range(&range, 30), 4);
    /// assert_eq!(TimeRange::number_of_slots_in_range(&range, 7), 0);
    /// assert_eq!(TimeRange::number_of_slots_in_range(&range, 120), 0);
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    pub const fn number_of_slots_in_range(range: &TimeRange, slot_minutes: u16) -> u16 {
        if slot_minutes == 0
            || slot_minutes % 5 != 0
            || range.duration() % 5 != 0
            || slot_minutes >= range.duration()
        {
            return 0;
        }
        range.duration() / slot_minutes
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Lexicographic comparison on `(start, end)`: positive when `self`
    /// orders after `that`, negative when before, zero when equal.
    pub fn compare_to(&self, that: &TimeRange) -> i32 {
        match self.cmp(that) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        }
    }

    /// Whether `self` orders strictly after `that`.
    #[inline]
    pub fn is_after(&self, that: &TimeRange) -> bool {
        self.compare_to(that) > 0
    }

    // ── containment / overlap ─────────────────────────────────────────

    /// Whether `value` (a [`Time`] or another [`TimeRange`]) lies within
    /// this range, inclusive on both endpoints.
    #[inline]
    pub fn contains<T: RangeElement>(&self, value: &T) -> bool {
        value.contained_in(self)
    }

    /// Whether the two ranges share any interior point.
    ///
    /// Strict on both sides: ranges that merely touch at an endpoint do not
    /// overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::TimeRange;
    ///
    /// let morning: TimeRange = "09:00-12:00".parse()?;
    /// let midday: TimeRange = "11:00-14:00".parse()?;
    /// let afternoon: TimeRange = "12:00-18:00".parse()?;
    ///
    /// assert!(morning.overlaps(&midday));
    /// assert!(!morning.overlaps(&afternoon));
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    #[inline]
    pub fn overlaps(&self, that: &TimeRange) -> bool {
        self.start < that.end && self.end > that.start
    }

    // ── serialisation ─────────────────────────────────────────────────

    /// Format as `HH:MM-HH:MM` applying the supplied DST options to both
    /// endpoints.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        format!(
            "{}{}{}",
            self.start.format_with(options),
            SEPARATOR,
            self.end.format_with(options)
        )
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, SEPARATOR, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("TimeRange", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: Time,
            end: Time,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimeRange::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> TimeRange {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for text in ["00:00-23:59", "09:30-14:35", "10:00-10:05"] {
            assert_eq!(range(text).to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "10:00", "10:00-", "-10:00", "10:00-11:00-12:00", "10.00-11.00"] {
            assert!(text.parse::<TimeRange>().is_err(), "`{text}` parsed");
        }
    }

    #[test]
    fn test_construction_requires_strict_order() {
        let start = Time::new(10, 0);

        assert!(TimeRange::new(start, Time::new(11, 0)).is_ok());
        assert_eq!(
            TimeRange::new(start, start),
            Err(Error::RangeOrder { start, end: start })
        );
        assert!(matches!(
            "12:00-10:00".parse::<TimeRange>(),
            Err(Error::RangeOrder { .. })
        ));
    }

    #[test]
    fn test_from_start_synthesises_five_minutes() {
        let range = TimeRange::from_start(Time::new(10, 0)).unwrap();
        assert_eq!(range.to_string(), "10:00-10:05");
        assert_eq!(range.duration(), 5);

        // the synthesised end would wrap past midnight
        assert!(TimeRange::from_start(Time::new(23, 58)).is_err());
    }

    #[test]
    fn test_duration_in_minutes() {
        assert_eq!(range("10:00-12:00").duration(), 120);
        assert_eq!(range("09:30-09:35").duration(), 5);
        assert_eq!(range("00:00-23:59").duration(), 1439);
    }

    #[test]
    fn test_number_of_slots_guards() {
        let two_hours = range("10:00-12:00");
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 30), 4);
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 5), 24);
        // step not a multiple of 5
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 7), 0);
        // step equal to the duration
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 120), 0);
        // step larger than the duration
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 180), 0);
        // zero step
        assert_eq!(TimeRange::number_of_slots_in_range(&two_hours, 0), 0);
        // duration not a multiple of 5
        let odd = range("10:00-11:02");
        assert_eq!(TimeRange::number_of_slots_in_range(&odd, 30), 0);
    }

    #[test]
    fn test_contains_is_inclusive_on_both_ends() {
        let outer = range("10:00-12:00");

        assert!(outer.contains(&Time::new(10, 0)));
        assert!(outer.contains(&Time::new(12, 0)));
        assert!(outer.contains(&Time::new(11, 15)));
        assert!(!outer.contains(&Time::new(9, 59)));
        assert!(!outer.contains(&Time::new(12, 1)));

        assert!(outer.contains(&outer));
        assert!(outer.contains(&range("10:30-11:30")));
        assert!(outer.contains(&range("10:00-11:00")));
        assert!(!outer.contains(&range("09:30-11:00")));
        assert!(!outer.contains(&range("11:00-12:30")));
    }

    #[test]
    fn test_overlaps_is_strict() {
        let base = range("10:00-12:00");

        assert!(base.overlaps(&range("11:00-13:00")));
        assert!(base.overlaps(&range("09:00-10:30")));
        assert!(base.overlaps(&range("10:30-11:30")));
        assert!(base.overlaps(&range("09:00-13:00")));
        // touching endpoints do not overlap
        assert!(!base.overlaps(&range("12:00-13:00")));
        assert!(!base.overlaps(&range("08:00-10:00")));
        assert!(!base.overlaps(&range("13:00-14:00")));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = range("09:00-10:00");
        let b = range("09:00-11:00");
        let c = range("10:00-10:30");

        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.compare_to(&b), -1);
        assert_eq!(b.compare_to(&a), 1);
        assert_eq!(a.compare_to(&a), 0);
        assert!(c.is_after(&b));
        assert!(!a.is_after(&b));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_revalidates_order() {
        let range = range("10:00-12:00");
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"hours":10,"minutes":0},"end":{"hours":12,"minutes":0}}"#
        );
        assert_eq!(serde_json::from_str::<TimeRange>(&json).unwrap(), range);

        let inverted = r#"{"start":{"hours":12,"minutes":0},"end":{"hours":10,"minutes":0}}"#;
        assert!(serde_json::from_str::<TimeRange>(inverted).is_err());
    }
}
