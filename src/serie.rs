// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Deduplicated, canonically sorted collection of [`TimeRange`]s.
//!
//! A [`RangeSerie`] models one day's availability: a set of ranges keyed by
//! their canonical string, so two ranges with the same text collapse to one
//! entry.  Iteration and serialisation always present ranges in ascending
//! `(start, end)` order regardless of insertion order.  Overlapping entries
//! are permitted and preserved as-is; nothing is ever merged or split.
//!
//! The module also hosts [`RangeSerie::slottable`], the slot-generation
//! algorithm that decomposes a single range into evenly spaced sub-ranges.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::dst::{FormatOptions, ParseOptions};
use crate::error::{Entity, Error, Result};
use crate::range::{RangeElement, TimeRange};
use crate::time::{Time, MINUTES_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SEPARATOR: char = ',';

/// Values usable as lookup keys in a [`RangeSerie`].
///
/// A serie is keyed by canonical range strings; this adapter lets `set`-side
/// types ([`TimeRange`]) and display-side types (`str`, `String`) address
/// the same entry.
pub trait RangeKey {
    /// The canonical-string form of the key.
    fn canonical(&self) -> Cow<'_, str>;
}

impl RangeKey for TimeRange {
    fn canonical(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl RangeKey for str {
    fn canonical(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl RangeKey for String {
    fn canonical(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Options for [`RangeSerie::slottable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlottableOptions {
    /// Width of each generated slot in minutes.  Defaults to the step size,
    /// producing contiguous non-overlapping slots; a larger value produces
    /// overlapping sliding windows.
    pub time_required: Option<u16>,
    /// How many minutes a generated slot may extend past the sliced range's
    /// end.  Defaults to 0.
    pub allowed_minutes_overflow: u16,
}

// ═══════════════════════════════════════════════════════════════════════════
// RangeSerie
// ═══════════════════════════════════════════════════════════════════════════

/// A sorted, deduplicated set of time ranges.
///
/// # Examples
///
/// ```
/// use weekgrid::RangeSerie;
///
/// // insertion order does not matter
/// let serie: RangeSerie = "14:00-18:00,08:30-12:30".parse()?;
/// assert_eq!(serie.to_string(), "08:30-12:30,14:00-18:00");
/// # Ok::<(), weekgrid::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSerie {
    ranges: BTreeMap<String, TimeRange>,
}

impl RangeSerie {
    // ── constructors ──────────────────────────────────────────────────

    /// Create an empty serie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a serie from any range iterator, deduplicating by canonical
    /// string.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = TimeRange>,
    {
        let mut serie = Self::new();
        for range in ranges {
            serie.set(range);
        }
        serie
    }

    /// Parse a comma-separated range list applying the supplied DST options
    /// to every time.
    pub fn parse_with(value: &str, options: &ParseOptions) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::format(Entity::RangeSerie, value));
        }

        let mut serie = Self::new();
        for raw in value.split(SEPARATOR) {
            serie.set(TimeRange::parse_with(raw, options)?);
        }
        Ok(serie)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Number of distinct ranges in the serie.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the serie holds no ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The earliest range, by `(start, end)` order.
    pub fn first(&self) -> Option<TimeRange> {
        self.to_vec().first().copied()
    }

    /// The latest range, by `(start, end)` order.
    pub fn last(&self) -> Option<TimeRange> {
        self.to_vec().last().copied()
    }

    /// All ranges in ascending `(start, end)` order.
    ///
    /// This is the only iteration surface of a serie; the internal map order
    /// is never exposed.
    pub fn to_vec(&self) -> Vec<TimeRange> {
        let mut ranges: Vec<TimeRange> = self.ranges.values().copied().collect();
        ranges.sort();
        ranges
    }

    // ── mutators ──────────────────────────────────────────────────────

    /// Insert a range, replacing an entry with the same canonical string.
    /// Chainable.
    pub fn set(&mut self, range: TimeRange) -> &mut Self {
        self.ranges.insert(range.to_string(), range);
        self
    }

    /// Whether the serie holds an entry with `key`'s canonical string.
    pub fn has<K: RangeKey + ?Sized>(&self, key: &K) -> bool {
        self.ranges.contains_key(key.canonical().as_ref())
    }

    /// Remove the entry with `key`'s canonical string.  Returns whether an
    /// entry was removed.
    pub fn delete<K: RangeKey + ?Sized>(&mut self, key: &K) -> bool {
        self.ranges.remove(key.canonical().as_ref()).is_some()
    }

    /// Swap the entry at `old` for `range`.
    ///
    /// A no-op when `old` is absent or when `range`'s canonical string is
    /// already present: an existing distinct entry is never overwritten.
    /// Chainable either way.
    pub fn replace<K: RangeKey + ?Sized>(&mut self, old: &K, range: TimeRange) -> &mut Self {
        if !self.has(old) || self.has(&range) {
            return self;
        }
        self.delete(old);
        self.set(range)
    }

    // ── containment ───────────────────────────────────────────────────

    /// Whether any range in the serie contains `value` (a [`Time`] or a
    /// [`TimeRange`]), endpoints included.
    pub fn contains<T: RangeElement>(&self, value: &T) -> bool {
        self.ranges.values().any(|range| range.contains(value))
    }

    /// The first containing range in sorted order, if any.
    pub fn find_containing<T: RangeElement>(&self, value: &T) -> Option<TimeRange> {
        self.to_vec().into_iter().find(|range| range.contains(value))
    }

    // ── slot generation ───────────────────────────────────────────────

    /// Decompose `range` into evenly spaced slots, advancing by
    /// `slot_minutes` per step.
    ///
    /// Each candidate slot starts on a step boundary and spans
    /// `options.time_required` minutes (defaulting to the step size); it is
    /// kept when it ends no later than the range's end plus
    /// `options.allowed_minutes_overflow`.  With the default width the
    /// result is a contiguous, non-overlapping cover of the range; a larger
    /// width yields every valid sliding-window placement; the overflow
    /// allowance admits final slots that spill past the nominal end by a
    /// bounded amount.
    ///
    /// Fails with [`Error::SlotGeneration`] when the step or the range
    /// duration is not a multiple of 5 minutes, or the step is not strictly
    /// smaller than the duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use weekgrid::{RangeSerie, SlottableOptions};
    ///
    /// let range = "10:00-12:00".parse()?;
    ///
    /// let slots = RangeSerie::slottable(30, &range, &SlottableOptions::default())?;
    /// assert_eq!(slots.to_string(), "10:00-10:30,10:30-11:00,11:00-11:30,11:30-12:00");
    ///
    /// let windows = RangeSerie::slottable(
    ///     30,
    ///     &range,
    ///     &SlottableOptions { time_required: Some(60), ..Default::default() },
    /// )?;
    /// assert_eq!(windows.to_string(), "10:00-11:00,10:30-11:30,11:00-12:00");
    /// # Ok::<(), weekgrid::Error>(())
    /// ```
    pub fn slottable(
        slot_minutes: u16,
        range: &TimeRange,
        options: &SlottableOptions,
    ) -> Result<Self> {
        let time_required = options.time_required.unwrap_or(slot_minutes);

        let max_slots = TimeRange::number_of_slots_in_range(range, slot_minutes);
        if max_slots == 0 {
            return Err(Error::SlotGeneration {
                range: *range,
                slot_minutes,
            });
        }

        // All arithmetic happens in plain minutes-of-day so the tolerance
        // check is immune to midnight wraparound.
        let limit = range.end().minutes_of_day() as u32 + options.allowed_minutes_overflow as u32;

        let mut serie = Self::new();
        let mut cursor = range.start().minutes_of_day() as u32;

        for _ in 0..=max_slots {
            let candidate_end = cursor + time_required as u32;

            // A slot ending past 23:59 has no representable TimeRange and
            // is dropped even when the overflow allowance would admit it.
            if candidate_end <= limit && candidate_end < MINUTES_PER_DAY as u32 {
                let slot =
                    TimeRange::new(Time::from_minutes(cursor), Time::from_minutes(candidate_end))?;
                serie.set(slot);
            }

            cursor += slot_minutes as u32;
        }

        Ok(serie)
    }

    // ── serialisation ─────────────────────────────────────────────────

    /// Format as a sorted comma-separated list applying the supplied DST
    /// options to every time.
    pub fn format_with(&self, options: &FormatOptions) -> String {
        self.to_vec()
            .iter()
            .map(|range| range.format_with(options))
            .collect::<Vec<_>>()
            .join(",")
    }
}

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for RangeSerie {
    /// Sorted ranges joined by `,`; two series holding the same set of
    /// ranges always render identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separate = false;
        for range in self.to_vec() {
            if separate {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
            separate = true;
        }
        Ok(())
    }
}

impl FromStr for RangeSerie {
    type Err = Error;

    /// Parse a comma-separated range list.  Empty input is rejected: an
    /// empty serie has no textual form of its own (see `Week` for how empty
    /// days are encoded).
    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

impl FromIterator<TimeRange> for RangeSerie {
    fn from_iter<I: IntoIterator<Item = TimeRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for RangeSerie {
    /// Serialises as a JSON array of ranges in canonical order.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.to_vec())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RangeSerie {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ranges = Vec::<TimeRange>::deserialize(deserializer)?;
        Ok(Self::from_ranges(ranges))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
