// SPDX-License-Identifier: MIT

//!
//! The lane timeline time types (day index, time of day, duration, zoom level)
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// The number of minutes in a day
pub const MINUTES_PER_DAY: i64 = 1440;

/// The largest day index allowed.  This bounds the size of the per-day offset
/// table the renderer builds.
pub const MAX_DAY: i64 = 36_600;

/// The largest event duration allowed (minutes).  Only the storage width
/// bounds it; an end time is always summed as [`Minutes`].
pub const MAX_DURATION: i64 = u32::MAX as i64;

/// An absolute number of minutes (e.g. a position on the continuous axis, or
/// the time at which an event ends).  Wide enough that summing offsets and
/// durations never overflows.
pub type Minutes = u64;

/// Errors that can arise in relation to the time types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The day index is not allowed (must be 0 <= day <= [`MAX_DAY`])
    #[error("Day `{0}` is not allowed (must be 0-{max})", max = MAX_DAY)]
    InvalidDay(i64),

    /// The time of day is not allowed (must be 0 <= time < [`MINUTES_PER_DAY`])
    #[error("Time of day `{0}` is not allowed (must be 0-1439 minutes)")]
    InvalidTimeOfDay(i64),

    /// The duration is not allowed (must be 1 <= duration <= [`MAX_DURATION`])
    #[error("Duration `{0}` is not allowed (must be 1-{max} minutes)", max = MAX_DURATION)]
    InvalidDuration(i64),

    /// The zoom level is not allowed (must be a positive number of minutes)
    #[error("Zoom level `{0}` is not allowed (must be a positive number of minutes)")]
    InvalidZoomLevel(i64),
}

/// The 0-based index of a day on the timeline
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DayIndex(u32);

/// A time of day, in minutes since the start of the day
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TimeOfDay(u16);

/// The length of an event in minutes.  Always positive.  Events may run past
/// midnight (nothing is clipped to the day boundary).
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Duration(u32);

/// The number of minutes represented by a single grid unit on the axis
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ZoomLevel(u32);

impl DayIndex {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The day index as a `usize` (for indexing per-day tables)
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TimeOfDay {
    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn minutes(&self) -> Minutes {
        Minutes::from(self.0)
    }
}

impl Duration {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> Minutes {
        Minutes::from(self.0)
    }
}

impl ZoomLevel {
    /// Create a zoom level from a non-zero number of minutes.  Usable in
    /// `const` items.
    pub const fn from_non_zero(minutes: NonZeroU32) -> Self {
        ZoomLevel(minutes.get())
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn minutes(&self) -> Minutes {
        Minutes::from(self.0)
    }
}

impl TryFrom<i64> for DayIndex {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=MAX_DAY).contains(&value) {
            Ok(DayIndex(value as u32))
        } else {
            Err(TimeError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for TimeOfDay {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..MINUTES_PER_DAY).contains(&value) {
            Ok(TimeOfDay(value as u16))
        } else {
            Err(TimeError::InvalidTimeOfDay(value))
        }
    }
}

impl TryFrom<i64> for Duration {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=MAX_DURATION).contains(&value) {
            Ok(Duration(value as u32))
        } else {
            Err(TimeError::InvalidDuration(value))
        }
    }
}

impl TryFrom<i64> for ZoomLevel {
    type Error = TimeError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=i64::from(u32::MAX)).contains(&value) {
            Ok(ZoomLevel(value as u32))
        } else {
            Err(TimeError::InvalidZoomLevel(value))
        }
    }
}

impl<'de> Deserialize<'de> for DayIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        DayIndex::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        TimeOfDay::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Duration::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for ZoomLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        ZoomLevel::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Format a number of minutes as `HH:MM`.  Hours are not wrapped at 24, so a
/// day slot that runs past midnight is labelled e.g. `25:30`.
pub fn format_clock(minutes: Minutes) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;
    format!("{hours:02}:{minutes:02}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from() {
        // Should return error
        assert!(DayIndex::try_from(-1).is_err());
        assert!(DayIndex::try_from(MAX_DAY + 1).is_err());
        assert!(TimeOfDay::try_from(-1).is_err());
        assert!(TimeOfDay::try_from(1440).is_err());
        assert!(Duration::try_from(0).is_err());
        assert!(Duration::try_from(-30).is_err());
        assert!(Duration::try_from(MAX_DURATION + 1).is_err());
        assert!(ZoomLevel::try_from(0).is_err());

        // Should be ok
        assert_eq!(DayIndex::try_from(0).unwrap().value(), 0);
        assert_eq!(TimeOfDay::try_from(1439).unwrap().value(), 1439);
        assert_eq!(Duration::try_from(2000).unwrap().value(), 2000);
        assert_eq!(Duration::try_from(600_000).unwrap().minutes(), 600_000);
        assert_eq!(Duration::try_from(MAX_DURATION).unwrap().value(), u32::MAX);
        assert_eq!(ZoomLevel::try_from(450).unwrap().value(), 450);
    }

    #[test]
    fn deserialisation() {
        assert_eq!(
            serde_json::from_str::<TimeOfDay>("540").unwrap(),
            TimeOfDay(540)
        );
        assert!(serde_json::from_str::<TimeOfDay>("1440").is_err());
        assert!(serde_json::from_str::<Duration>("0").is_err());
        assert!(serde_json::from_str::<DayIndex>("1.5").is_err());
        assert!(serde_json::from_str::<DayIndex>(r#""3""#).is_err());
    }

    #[test]
    fn error_messages_name_the_range() {
        assert_eq!(
            TimeError::InvalidDuration(0).to_string(),
            "Duration `0` is not allowed (must be 1-4294967295 minutes)"
        );
        assert_eq!(
            TimeError::InvalidDay(36_601).to_string(),
            "Day `36601` is not allowed (must be 0-36600)"
        );
    }

    #[test]
    fn serialisation() {
        assert_eq!(serde_json::to_string(&DayIndex(3)).unwrap(), "3");
        assert_eq!(ZoomLevel(30).to_string(), "30");
    }

    #[test]
    fn clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(1439), "23:59");
        assert_eq!(format_clock(1530), "25:30");
    }
}
