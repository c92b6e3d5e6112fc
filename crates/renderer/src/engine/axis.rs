// SPDX-License-Identifier: MIT

//!
//! The continuous time axis: days laid end to end, each rounded up to a whole
//! number of grid units
//!

use crate::engine::{DayBounds, ceil_to_grid_unit, days_up_to};
use lane_timeline_core::{DayIndex, Minutes, TimeOfDay, ZoomLevel};
use log::trace;

/// The single continuous axis that every lane of a timeline shares.
///
/// Day 0 starts at 0.  Each following day starts where the previous day's
/// content ends, rounded up to a whole number of grid units, so the offsets
/// never decrease and the gridlines line up with the day boundaries.  Days
/// without events take up no space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    /// Minutes per grid unit
    zoom: ZoomLevel,

    /// The offset (minutes) at which each day starts, indexed by day
    day_offsets: Vec<Minutes>,

    /// The length of the whole axis (minutes).  The last day is not rounded.
    total_height: Minutes,

    /// The last day on the axis
    max_day: DayIndex,
}

impl Axis {
    /// Build the axis for days `0..=max_day`
    pub fn build(day_bounds: &DayBounds, max_day: DayIndex, zoom: ZoomLevel) -> Self {
        let days: Vec<DayIndex> = days_up_to(max_day).collect();

        let mut day_offsets = Vec::with_capacity(days.len());
        let mut cumulative_offset = 0;
        day_offsets.push(cumulative_offset);
        for pair in days.windows(2) {
            let previous_day_end = day_bounds.bound(pair[0]);
            cumulative_offset += ceil_to_grid_unit(previous_day_end, zoom);
            day_offsets.push(cumulative_offset);
        }

        let total_height = cumulative_offset + day_bounds.bound(max_day);
        trace!("built axis over {} day(s), {total_height} minute(s) long", days.len());

        Self {
            zoom,
            day_offsets,
            total_height,
            max_day,
        }
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// The length of the whole axis in minutes
    pub fn total_height(&self) -> Minutes {
        self.total_height
    }

    /// The last day on the axis
    pub fn max_day(&self) -> DayIndex {
        self.max_day
    }

    /// Borrow the day offsets (indexed by day)
    pub fn day_offsets(&self) -> &[Minutes] {
        &self.day_offsets
    }

    /// The offset at which a day starts (`None` if the day is after the last
    /// day)
    pub fn day_offset(&self, day: DayIndex) -> Option<Minutes> {
        self.day_offsets.get(day.as_usize()).copied()
    }

    /// The start and end of a day's slot on the axis.  The last day ends at
    /// the end of the axis.
    pub fn day_span(&self, day: DayIndex) -> Option<(Minutes, Minutes)> {
        let start = self.day_offset(day)?;
        let end = self
            .day_offsets
            .get(day.as_usize() + 1)
            .copied()
            .unwrap_or(self.total_height);
        Some((start, end))
    }

    /// The absolute position on the axis of a time on a day
    pub fn position(&self, day: DayIndex, time: TimeOfDay) -> Option<Minutes> {
        Some(self.day_offset(day)? + time.minutes())
    }

    /// Find the day whose slot `[start, end)` contains the absolute time.  The
    /// end of the axis belongs to the last day, as does anything past it.
    pub fn day_at(&self, minutes: Minutes) -> DayIndex {
        let index = self
            .day_offsets
            .partition_point(|offset| *offset <= minutes)
            .saturating_sub(1);
        DayIndex::try_from(index as i64).unwrap_or(self.max_day)
    }

    /// Every day on the axis, in order
    pub fn days(&self) -> impl Iterator<Item = DayIndex> + Clone {
        days_up_to(self.max_day)
    }

    /// The gridline positions: every multiple of the zoom level from 0 up to
    /// and including the end of the axis.  Can be iterated any number of
    /// times.
    pub fn grid_lines(&self) -> impl Iterator<Item = Minutes> + Clone {
        (0..=self.total_height).step_by(self.zoom.value() as usize)
    }
}
