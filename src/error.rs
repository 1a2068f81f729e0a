// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for parsing and slot generation.
//!
//! Every fallible operation in the crate fails synchronously with an
//! [`Error`], raised at the constructor or parse call that detected the
//! violation.  Nothing is retried or recovered internally: a value either
//! fully exists and is valid, or construction fails.
//!
//! Format errors carry the [`Entity`] that was being parsed together with
//! the offending input, so the display text can show both the expected
//! grammar and what was actually provided.

use crate::range::TimeRange;
use crate::time::Time;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The entity kind a format error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A single `HH:MM` time of day.
    Time,
    /// A `HH:MM-HH:MM` interval.
    TimeRange,
    /// A comma-separated list of intervals.
    RangeSerie,
    /// A `<dayNumber>;<ranges>` day line.
    Day,
    /// A newline-separated block of up to seven day lines.
    Week,
}

impl Entity {
    /// The textual grammar this entity is parsed from.
    pub const fn grammar(self) -> &'static str {
        match self {
            Entity::Time => "HH:MM  [00 <= HH < 24, 00 <= MM < 60]",
            Entity::TimeRange => "HH:MM-HH:MM  [start strictly before end]",
            Entity::RangeSerie => "HH:MM-HH:MM,HH:MM-HH:MM,...",
            Entity::Day => "<0..6>;HH:MM-HH:MM,HH:MM-HH:MM,...",
            Entity::Week => "1..7 newline-separated range lists, line i = day i (0 = sunday)",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Entity::Time => "Time",
            Entity::TimeRange => "TimeRange",
            Entity::RangeSerie => "RangeSerie",
            Entity::Day => "Day",
            Entity::Week => "Week",
        };
        f.write_str(name)
    }
}

/// Errors raised by parsing, construction and slot generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input text does not match the entity's grammar: wrong separator
    /// count or position, wrong segment length, empty input where non-empty
    /// is required, out-of-range numeric field, or wrong line count for a
    /// week.
    #[error("invalid {entity} `{value}`: expected `{}`", .entity.grammar())]
    InvalidFormat {
        /// The entity that was being parsed.
        entity: Entity,
        /// The offending input.
        value: String,
    },

    /// A range whose start is not strictly before its end.
    #[error("invalid time range `{start}-{end}`: start must be strictly before end")]
    RangeOrder {
        /// The attempted start of the range.
        start: Time,
        /// The attempted end of the range.
        end: Time,
    },

    /// Slot generation preconditions unmet: the step and the range duration
    /// must both be multiples of 5 minutes and the step must be strictly
    /// shorter than the duration.
    #[error(
        "cannot slice `{range}` with a {slot_minutes} minute step: \
         the step and the range duration must be multiples of 5, \
         and the step must be shorter than the duration"
    )]
    SlotGeneration {
        /// The range that was being sliced.
        range: TimeRange,
        /// The requested step size in minutes.
        slot_minutes: u16,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidFormat`].
    pub(crate) fn format(entity: Entity, value: impl Into<String>) -> Self {
        Error::InvalidFormat {
            entity,
            value: value.into(),
        }
    }
}
