// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Full seven-day schedule.
//!
//! A [`Week`] holds exactly one [`Day`] per [`Weekday`], pre-populated at
//! construction so every read is total — there is no lazy fill-in and no
//! mutation on read.  The textual form is up to seven newline-separated
//! range lists where the line position encodes the day: line 0 is Sunday,
//! line 6 Saturday.  Empty lines and missing trailing lines denote empty
//! days, which is how partial weeks (e.g. work-week-only schedules) are
//! written.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::day::{Day, Weekday};
use crate::dst::{FormatOptions, ParseOptions};
use crate::error::{Entity, Error, Result};
use crate::serie::RangeSerie;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = '\n';

/// A total map from the seven weekdays to their availability.
///
/// # Examples
///
/// ```
/// use weekgrid::{Time, Week, Weekday};
///
/// // Sunday line empty, Monday..Friday populated, Saturday line missing.
/// let week: Week = "\n09:00-17:00\n09:00-17:00\n09:00-17:00\n09:00-17:00\n09:00-13:00"
///     .parse()?;
///
/// assert!(week.sunday().is_empty());
/// assert!(week.monday().contains(&Time::new(12, 0)));
/// assert!(week.saturday().is_empty());
/// assert_eq!(week.day(Weekday::Friday).range_text(), "09:00-13:00");
/// # Ok::<(), weekgrid::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: [Day; 7],
}

impl Week {
    // ── constructors ──────────────────────────────────────────────────

    /// A week with no availability on any day.
    pub fn empty() -> Self {
        Self {
            days: Weekday::ALL.map(Day::empty),
        }
    }

    /// Broadcast one day's availability to all seven days.
    ///
    /// Each day keeps its own tag; only the ranges are shared.
    pub fn from_day(day: &Day) -> Self {
        Self::from_serie(day.ranges())
    }

    /// Broadcast a range serie to all seven days.
    pub fn from_serie(serie: &RangeSerie) -> Self {
        Self {
            days: Weekday::ALL.map(|weekday| Day::new(serie.clone(), weekday)),
        }
    }

    /// Parse the newline-separated form applying the supplied DST options.
    pub fn parse_with(value: &str, options: &ParseOptions) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::format(Entity::Week, value));
        }

        let lines: Vec<&str> = value.split(SEPARATOR).collect();
        if lines.len() > 7 {
            return Err(Error::format(Entity::Week, value));
        }

        let mut week = Self::empty();
        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let weekday = Weekday::ALL[index];
            week.days[index] = Day::parse_on_with(line, weekday, options)?;
        }
        Ok(week)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The availability of `weekday`.  Total: every day always exists.
    #[inline]
    pub fn day(&self, weekday: Weekday) -> &Day {
        &self.days[weekday.index() as usize]
    }

    /// All seven days in index order, Sunday first.
    #[inline]
    pub const fn days(&self) -> &[Day; 7] {
        &self.days
    }

    /// Today's availability, by the current UTC weekday.
    pub fn today(&self) -> &Day {
        self.day(Weekday::from_chrono(chrono::Utc::now().weekday()))
    }

    /// Sunday's availability.
    pub fn sunday(&self) -> &Day {
        self.day(Weekday::Sunday)
    }

    /// Monday's availability.
    pub fn monday(&self) -> &Day {
        self.day(Weekday::Monday)
    }

    /// Tuesday's availability.
    pub fn tuesday(&self) -> &Day {
        self.day(Weekday::Tuesday)
    }

    /// Wednesday's availability.
    pub fn wednesday(&self) -> &Day {
        self.day(Weekday::Wednesday)
    }

    /// Thursday's availability.
    pub fn thursday(&self) -> &Day {
        self.day(Weekday::Thursday)
    }

    /// Friday's availability.
    pub fn friday(&self) -> &Day {
        self.day(Weekday::Friday)
    }

    /// Saturday's availability.
    pub fn saturday(&self) -> &Day {
        self.day(Weekday::Saturday)
    }

    // ── mutators ──────────────────────────────────────────────────────

    /// Store `day` under `weekday`, retagging it so the stored day always
    /// agrees with its key.
    pub fn set_day(&mut self, weekday: Weekday, day: Day) -> &mut Self {
        self.days[weekday.index() as usize] = day.with_weekday(weekday);
        self
    }

    // ── serialisation ─────────────────────────────────────────────────

    /// Format as seven newline-separated lines applying the supplied DST
    /// options.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        self.days
            .iter()
            .map(|day| day.ranges().format_with(options))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Week {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for Week {
    /// Always seven lines; the day tag is omitted because the position
    /// encodes it.  Empty days render as empty lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, day) in self.days.iter().enumerate() {
            if index > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", day.ranges())?;
        }
        Ok(())
    }
}

impl FromStr for Week {
    type Err = Error;

    /// Parse 1–7 newline-separated range lists; line `i` is day `i`
    /// (0 = Sunday).  Empty input and more than seven lines are rejected;
    /// empty or missing trailing lines leave those days empty.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Week {
    /// Serialises as an object keyed by lowercase day name, each value a
    /// range array.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Week", 7)?;
        for weekday in Weekday::ALL {
            s.serialize_field(weekday.name(), self.day(weekday).ranges())?;
        }
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Week {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Raw {
            sunday: RangeSerie,
            monday: RangeSerie,
            tuesday: RangeSerie,
            wednesday: RangeSerie,
            thursday: RangeSerie,
            friday: RangeSerie,
            saturday: RangeSerie,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mut week = Week::empty();
        let series = [
            raw.sunday,
            raw.monday,
            raw.tuesday,
            raw.wednesday,
            raw.thursday,
            raw.friday,
            raw.saturday,
        ];
        for (weekday, serie) in Weekday::ALL.into_iter().zip(series) {
            week.set_day(weekday, Day::new(serie, weekday));
        }
        Ok(week)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
