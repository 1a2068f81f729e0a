// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Optional Daylight-Saving-Time compensation.
//!
//! Some deployments store schedule text written against standard time and
//! read it back while the local clock observes DST.  The types here let a
//! caller *opt in* to a one-hour shift at the parse/serialise boundary:
//! parsed hours are shifted **+1** and serialised hours **−1** whenever the
//! supplied reference moment falls within DST.
//!
//! The shift is never applied by default — [`ParseOptions::default()`] and
//! [`FormatOptions::default()`] leave times untouched, and comparisons
//! always operate on the stored minutes regardless of how a value was
//! parsed.  Mixing shifted and unshifted values in one collection is the
//! caller's responsibility.

use chrono::{DateTime, Datelike, Local, Offset, TimeZone};

/// Returns whether `moment` falls within Daylight Saving Time of the local
/// time zone.
///
/// The standard (non-DST) offset of the year is taken as the smaller of the
/// UTC offsets observed on January 1st and July 1st; DST is in effect
/// whenever the offset at `moment` exceeds it.  Zones without DST therefore
/// always report `false`.
pub fn is_dst_observed(moment: DateTime<Local>) -> bool {
    let year = moment.year();
    let offset_on = |month: u32| {
        Local
            .with_ymd_and_hms(year, month, 1, 12, 0, 0)
            .earliest()
            .map(|d| d.offset().fix().local_minus_utc())
    };

    let (Some(january), Some(july)) = (offset_on(1), offset_on(7)) else {
        return false;
    };

    let standard = january.min(july);
    moment.offset().fix().local_minus_utc() > standard
}

/// Options for the DST-aware parse variants.
///
/// With `dst_reference: None` (the default) parsing performs no adjustment.
/// With a reference moment set, parsed hours are shifted forward by one hour
/// when that moment observes DST, wrapping 24 to 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    /// Moment used to decide whether DST is in effect.
    pub dst_reference: Option<DateTime<Local>>,
}

impl ParseOptions {
    /// Whether the configured reference moment observes DST.
    pub fn dst_shift(&self) -> bool {
        self.dst_reference.is_some_and(is_dst_observed)
    }
}

/// Options for the DST-aware serialisation variants.
///
/// The inverse of [`ParseOptions`]: with a reference moment set, serialised
/// hours are shifted back by one hour when that moment observes DST,
/// wrapping 0 to 23.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Moment used to decide whether DST is in effect.
    pub dst_reference: Option<DateTime<Local>>,
}

impl FormatOptions {
    /// Whether the configured reference moment observes DST.
    pub fn dst_shift(&self) -> bool {
        self.dst_reference.is_some_and(is_dst_observed)
    }
}
