// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-of-week tagged availability.
//!
//! [`Weekday`] is the 0-based day index (`0 = Sunday .. 6 = Saturday`) and
//! [`Day`] pairs a [`RangeSerie`] with one.  The canonical textual form is
//! `<dayNumber>;<ranges>`; inside a `Week` the tag is omitted because the
//! line position already encodes it.

use std::fmt;
use std::str::FromStr;

use crate::dst::{FormatOptions, ParseOptions};
use crate::error::{Entity, Error, Result};
use crate::range::{RangeElement, TimeRange};
use crate::serie::{RangeSerie, SlottableOptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = ';';

// ═══════════════════════════════════════════════════════════════════════════
// Weekday
// ═══════════════════════════════════════════════════════════════════════════

/// Day of the week, numbered `0 = Sunday` through `6 = Saturday`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    /// Day 0.
    Sunday = 0,
    /// Day 1.
    Monday = 1,
    /// Day 2.
    Tuesday = 2,
    /// Day 3.
    Wednesday = 3,
    /// Day 4.
    Thursday = 4,
    /// Day 5.
    Friday = 5,
    /// Day 6.
    Saturday = 6,
}

impl Weekday {
    /// All seven days in index order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Look a day up by its 0-based index.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::Weekday;
    ///
    /// assert_eq!(Weekday::from_index(0)?, Weekday::Sunday);
    /// assert_eq!(Weekday::from_index(6)?, Weekday::Saturday);
    /// assert!(Weekday::from_index(7).is_err());
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| Error::format(Entity::Day, index.to_string()))
    }

    /// The 0-based index, `0 = Sunday`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Bridge from chrono's Monday-first weekday numbering.
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }

    /// Lowercase English day name, as used by the JSON form of `Week`.
    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Day
// ═══════════════════════════════════════════════════════════════════════════

/// Options for [`Day::slottable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlottableOptions {
    /// Day tag for the generated day.  Defaults to Monday.
    pub weekday: Weekday,
    /// Slot generation settings, forwarded to [`RangeSerie::slottable`].
    pub slot: SlottableOptions,
}

impl Default for DaySlottableOptions {
    fn default() -> Self {
        Self {
            weekday: Weekday::Monday,
            slot: SlottableOptions::default(),
        }
    }
}

/// One day's availability: a [`RangeSerie`] plus its [`Weekday`] tag.
///
/// # Examples
///
/// ```
/// use weekgrid::{Day, Weekday};
///
/// let monday: Day = "1;09:00-12:00,14:00-18:00".parse()?;
/// assert_eq!(monday.weekday(), Weekday::Monday);
/// assert_eq!(monday.to_string(), "1;09:00-12:00,14:00-18:00");
/// # Ok::<(), weekgrid::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    ranges: RangeSerie,
    weekday: Weekday,
}

impl Day {
    // ── constructors ──────────────────────────────────────────────────

    /// An availability-less day.
    pub fn empty(weekday: Weekday) -> Self {
        Self::new(RangeSerie::new(), weekday)
    }

    /// Tag an existing serie with a weekday.
    pub fn new(ranges: RangeSerie, weekday: Weekday) -> Self {
        Self { ranges, weekday }
    }

    /// Parse a bare range list as the given weekday (no `<dayNumber>;`
    /// prefix).  Fails on empty input.
    pub fn parse_on(value: &str, weekday: Weekday) -> Result<Self> {
        Self::parse_on_with(value, weekday, &ParseOptions::default())
    }

    /// [`Day::parse_on`] with explicit DST options.
    pub fn parse_on_with(value: &str, weekday: Weekday, options: &ParseOptions) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::format(Entity::Day, value));
        }
        Ok(Self::new(RangeSerie::parse_with(value, options)?, weekday))
    }

    /// Generate a slotted day from a single range.
    ///
    /// Delegates to [`RangeSerie::slottable`] and tags the result with
    /// `options.weekday`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::{Day, DaySlottableOptions, Weekday};
    ///
    /// let range = "10:00-12:00".parse()?;
    /// let day = Day::slottable(60, &range, &DaySlottableOptions::default())?;
    /// assert_eq!(day.weekday(), Weekday::Monday);
    /// assert_eq!(day.range_text(), "10:00-11:00,11:00-12:00");
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    pub fn slottable(
        slot_minutes: u16,
        range: &TimeRange,
        options: &DaySlottableOptions,
    ) -> Result<Self> {
        let serie = RangeSerie::slottable(slot_minutes, range, &options.slot)?;
        Ok(Self::new(serie, options.weekday))
    }

    /// The same availability retagged to another weekday.
    pub fn with_weekday(self, weekday: Weekday) -> Self {
        Self { weekday, ..self }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The day tag.
    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// The underlying serie.
    #[inline]
    pub const fn ranges(&self) -> &RangeSerie {
        &self.ranges
    }

    /// Mutable access to the underlying serie, for `set`/`delete`/`replace`.
    #[inline]
    pub fn ranges_mut(&mut self) -> &mut RangeSerie {
        &mut self.ranges
    }

    /// Number of ranges in the day.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the day has no availability.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Sorted ranges, see [`RangeSerie::to_vec`].
    pub fn to_vec(&self) -> Vec<TimeRange> {
        self.ranges.to_vec()
    }

    /// Whether any of the day's ranges contains `value`.
    pub fn contains<T: RangeElement>(&self, value: &T) -> bool {
        self.ranges.contains(value)
    }

    /// The first containing range in sorted order, if any.
    pub fn find_containing<T: RangeElement>(&self, value: &T) -> Option<TimeRange> {
        self.ranges.find_containing(value)
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Day ordering ignores availability: positive when `self`'s weekday is
    /// later in the week, negative when earlier, zero for the same day.
    ///
    /// Deliberately a method rather than `Ord`, which would have to agree
    /// with the structural equality of `==`.
    pub const fn compare_to(&self, that: &Day) -> i32 {
        self.weekday.index() as i32 - that.weekday.index() as i32
    }

    /// Whether `self`'s weekday falls after `that`'s.
    #[inline]
    pub const fn is_after(&self, that: &Day) -> bool {
        self.compare_to(that) > 0
    }

    // ── serialisation ─────────────────────────────────────────────────

    /// The bare sorted range list without the day prefix, as used inside a
    /// `Week` line.
    pub fn range_text(&self) -> String {
        self.ranges.to_string()
    }

    /// Format as `<dayNumber>;<ranges>` applying the supplied DST options.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        format!(
            "{}{}{}",
            self.weekday.index(),
            SEPARATOR,
            self.ranges.format_with(options)
        )
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.weekday.index(), SEPARATOR, self.ranges)
    }
}

impl FromStr for Day {
    type Err = Error;

    /// Parse the tagged form `<dayNumber>;<ranges>`, day number in `[0,6]`.
    fn from_str(s: &str) -> Result<Self> {
        let (raw_day, raw_ranges) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| Error::format(Entity::Day, s))?;

        let index: u8 = raw_day
            .parse()
            .map_err(|_| Error::format(Entity::Day, s))?;
        let weekday = Weekday::from_index(index)?;

        if raw_ranges.is_empty() {
            return Err(Error::format(Entity::Day, s));
        }

        Ok(Self::new(raw_ranges.parse()?, weekday))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Day {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Day", 2)?;
        s.serialize_field("ranges", &self.ranges)?;
        s.serialize_field("dayOfWeek", &self.weekday.index())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            ranges: RangeSerie,
            #[serde(rename = "dayOfWeek")]
            day_of_week: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        let weekday = Weekday::from_index(raw.day_of_week).map_err(serde::de::Error::custom)?;
        Ok(Self::new(raw.ranges, weekday))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;

    #[test]
    fn test_weekday_index_roundtrip() {
        for index in 0..7 {
            assert_eq!(Weekday::from_index(index).unwrap().index(), index);
        }
        assert!(Weekday::from_index(7).is_err());
        assert!(Weekday::from_index(255).is_err());
    }

    #[test]
    fn test_weekday_from_chrono_uses_sunday_zero() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sat), Weekday::Saturday);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        let text = "5;08:30-12:30,14:00-18:00";
        let day: Day = text.parse().unwrap();
        assert_eq!(day.weekday(), Weekday::Friday);
        assert_eq!(day.to_string(), text);
    }

    #[test]
    fn test_parse_sorts_ranges() {
        let day: Day = "2;14:00-18:00,08:30-12:30".parse().unwrap();
        assert_eq!(day.to_string(), "2;08:30-12:30,14:00-18:00");
        assert_eq!(day.range_text(), "08:30-12:30,14:00-18:00");
    }

    #[test]
    fn test_parse_rejects_bad_day_number_and_empty_ranges() {
        for text in ["7;10:00-11:00", "-1;10:00-11:00", "x;10:00-11:00", "3;", "", "10:00-11:00"] {
            assert!(
                matches!(
                    text.parse::<Day>(),
                    Err(Error::InvalidFormat { .. })
                ),
                "`{text}` parsed"
            );
        }
    }

    #[test]
    fn test_parse_on_takes_bare_ranges() {
        let day = Day::parse_on("10:00-11:00", Weekday::Wednesday).unwrap();
        assert_eq!(day.weekday(), Weekday::Wednesday);
        assert_eq!(day.to_string(), "3;10:00-11:00");

        assert!(Day::parse_on("", Weekday::Wednesday).is_err());
    }

    #[test]
    fn test_slottable_tags_result() {
        let range: TimeRange = "10:00-12:00".parse().unwrap();

        let default_tag = Day::slottable(30, &range, &DaySlottableOptions::default()).unwrap();
        assert_eq!(default_tag.weekday(), Weekday::Monday);
        assert_eq!(default_tag.len(), 4);

        let options = DaySlottableOptions {
            weekday: Weekday::Saturday,
            slot: SlottableOptions {
                time_required: Some(60),
                ..Default::default()
            },
        };
        let saturday = Day::slottable(30, &range, &options).unwrap();
        assert_eq!(saturday.weekday(), Weekday::Saturday);
        assert_eq!(saturday.range_text(), "10:00-11:00,10:30-11:30,11:00-12:00");
    }

    #[test]
    fn test_comparison_is_by_weekday_only() {
        let busy_monday: Day = "1;08:00-18:00".parse().unwrap();
        let idle_friday = Day::empty(Weekday::Friday);

        assert!(idle_friday.is_after(&busy_monday));
        assert!(!busy_monday.is_after(&idle_friday));
        assert_eq!(busy_monday.compare_to(&idle_friday), -4);
        assert_eq!(
            busy_monday.compare_to(&Day::empty(Weekday::Monday)),
            0
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let a: Day = "1;08:00-09:00".parse().unwrap();
        let b: Day = "1;08:00-09:00".parse().unwrap();
        let other_day: Day = "2;08:00-09:00".parse().unwrap();
        let other_ranges: Day = "1;08:00-09:30".parse().unwrap();

        assert_eq!(a, b);
        assert_ne!(a, other_day);
        assert_ne!(a, other_ranges);
    }

    #[test]
    fn test_retag_and_passthroughs() {
        let day: Day = "0;08:00-09:00,10:00-12:00".parse().unwrap();
        let retagged = day.clone().with_weekday(Weekday::Thursday);
        assert_eq!(retagged.weekday(), Weekday::Thursday);
        assert_eq!(retagged.range_text(), day.range_text());

        assert!(day.contains(&Time::new(11, 0)));
        assert_eq!(
            day.find_containing(&Time::new(8, 30)).unwrap().to_string(),
            "08:00-09:00"
        );
        assert_eq!(day.to_vec().len(), 2);
        assert!(!day.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_uses_day_of_week_field() {
        let day: Day = "4;10:00-11:00".parse().unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"dayOfWeek\":4"));
        assert_eq!(serde_json::from_str::<Day>(&json).unwrap(), day);

        assert!(serde_json::from_str::<Day>(r#"{"ranges":[],"dayOfWeek":9}"#).is_err());
    }
}
