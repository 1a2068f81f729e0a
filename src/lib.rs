// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Weekly schedule primitives.
//!
//! This crate models recurring time-of-day availability: points in a day,
//! intervals between them, sorted interval collections, tagged days and
//! full seven-day weeks — plus a slot generator that decomposes an interval
//! into evenly spaced sub-intervals.
//!
//! # Core types
//!
//! | Type | Meaning | Canonical text |
//! |------|---------|----------------|
//! | [`Time`] | minute-resolution wall-clock point | `HH:MM` |
//! | [`TimeRange`] | interval, start strictly before end | `HH:MM-HH:MM` |
//! | [`RangeSerie`] | sorted, deduplicated set of ranges | ranges joined by `,` |
//! | [`Day`] | serie tagged with a [`Weekday`] | `<0..6>;<ranges>` |
//! | [`Week`] | one [`Day`] per weekday | 7 range lines joined by `\n` |
//!
//! Every type parses from its canonical text via [`FromStr`](std::str::FromStr)
//! and serialises back losslessly via `Display`; a [`RangeSerie`] always
//! renders its ranges in ascending `(start, end)` order no matter how they
//! were inserted.
//!
//! # Slot generation
//!
//! [`RangeSerie::slottable`] slices a range into fixed-step slots:
//!
//! ```
//! use weekgrid::{RangeSerie, SlottableOptions};
//!
//! let range = "10:00-12:00".parse()?;
//! let slots = RangeSerie::slottable(30, &range, &SlottableOptions::default())?;
//!
//! assert_eq!(slots.to_string(), "10:00-10:30,10:30-11:00,11:00-11:30,11:30-12:00");
//! # Ok::<(), weekgrid::Error>(())
//! ```
//!
//! The slot width and an end-overflow tolerance are configurable through
//! [`SlottableOptions`]; a width larger than the step yields overlapping
//! sliding windows.
//!
//! # Features
//!
//! - `serde` — JSON-mirroring structured forms for every type
//!   (`{hours, minutes}`, `{start, end}`, range arrays, day-keyed objects),
//!   round-tripping without loss.
//!
//! # Daylight Saving Time
//!
//! Parsing and serialisation never adjust for DST by default.  Deployments
//! that store schedule text against standard time can opt into a one-hour
//! boundary shift through the [`dst`] module's explicit options; see its
//! documentation for the caveats.

mod day;
pub mod dst;
mod error;
mod range;
mod serie;
mod time;
mod week;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use day::{Day, DaySlottableOptions, Weekday};
pub use error::{Entity, Error, Result};
pub use range::{RangeElement, TimeRange};
pub use serie::{RangeKey, RangeSerie, SlottableOptions};
pub use time::Time;
pub use week::Week;
