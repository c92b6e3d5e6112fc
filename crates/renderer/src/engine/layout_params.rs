// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::Position;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Layout parameters that users can adjust.  None of these change with the
/// zoom level: zooming changes how many minutes a grid unit represents, not
/// how tall it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// The height of one grid unit in pixels (the reference height that the
    /// vertical scale is derived from)
    pub grid_unit_height_px: f64,

    /// The width of the gutter (left of the first lane) holding the gridline
    /// time labels
    pub gutter_width_px: f64,

    /// The width of each entity's lane
    pub lane_width_px: f64,

    /// The width of an event's box (centred in its lane)
    pub event_width_px: f64,

    /// The height of the area above the axis holding the timeline label and
    /// the lane headings
    pub heading_height_px: f64,

    /// The gap between timelines drawn side by side
    pub timeline_gap_px: f64,

    pub font_size_px: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            grid_unit_height_px: 80.0,
            gutter_width_px: 36.0,
            lane_width_px: 40.0,
            event_width_px: 24.0,
            heading_height_px: 48.0,
            timeline_gap_px: 96.0,
            font_size_px: 12.0,
        }
    }
}

impl LayoutParams {
    /// The x position of the lane at `lane_index`
    pub fn lane_x(&self, lane_index: usize) -> f64 {
        self.gutter_width_px + (lane_index as f64 * self.lane_width_px)
    }

    /// The x position of an event's box in a lane starting at `lane_x`
    pub fn event_x(&self, lane_x: f64) -> f64 {
        lane_x + (self.lane_width_px - self.event_width_px) / 2.0
    }

    /// The width of a timeline with `lane_count` lanes (gutter included)
    pub fn timeline_width(&self, lane_count: usize) -> f64 {
        self.lane_x(lane_count)
    }

    /// Whether the values can be used to lay out a timeline
    pub(crate) fn is_valid(&self) -> bool {
        let positive = [
            self.grid_unit_height_px,
            self.lane_width_px,
            self.event_width_px,
            self.font_size_px,
        ];
        let non_negative = [
            self.gutter_width_px,
            self.heading_height_px,
            self.timeline_gap_px,
        ];
        positive.iter().all(|value| value.is_finite() && *value > 0.0)
            && non_negative.iter().all(|value| value.is_finite() && *value >= 0.0)
            && self.event_width_px <= self.lane_width_px
    }
}

/// A box that specifies the location and size of something (e.g. the location
/// and size of an event's box)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}
