// SPDX-License-Identifier: MIT

//!
//! Primitives (everything a display layer needs to draw a timeline)
//!

use crate::{PositionAndSize, colour::Colour};
use lane_timeline_core::{DayIndex, EntityKey, Event, EventId, Minutes, TimelineLabel, ZoomLevel};
use serde::Serialize;
use std::fmt::Debug;

/// Shown in place of a timeline that has no events
pub const NO_EVENTS_MESSAGE: &str = "No events to display";

/// Shown in place of all timelines when no valid document is loaded
pub const NO_DATA_MESSAGE: &str = "Could not load data; make sure it is valid!";

/// The text shown when hovering over an event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub category: String,
    pub description: String,
    pub duration: String,
}

impl Tooltip {
    pub fn from_event(event: &Event) -> Self {
        Self {
            category: event.category().to_string(),
            description: event.description().to_string(),
            duration: format!("{} min", event.duration()),
        }
    }

    /// The tooltip as a single string (one line per part)
    pub fn text(&self) -> String {
        format!("{}\n{}\n{}", self.category, self.description, self.duration)
    }
}

/// Information needed to draw an event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBox {
    pub id: EventId,
    pub day: DayIndex,
    pub position_and_size: PositionAndSize,
    pub colour: String,
    pub tooltip: Tooltip,
}

/// Information needed to draw an entity's lane and its events (in day then
/// start time order)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    pub entity: EntityKey,
    pub position_and_size: PositionAndSize,
    pub events: Vec<EventBox>,
}

/// Information needed to draw a gridline and its time label.  The label is the
/// time relative to the start of the day the gridline falls in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub minutes: Minutes,
    pub day: DayIndex,
    pub top_px: f64,
    pub label: String,
}

/// Information needed to draw a day's background
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBand {
    pub day: DayIndex,
    pub top_px: f64,
    pub height_px: f64,
    pub colour: Colour,
}

/// Everything needed to draw one timeline.  Pixel values are relative to the
/// top of the axis and the left of the time label gutter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub timeline_id: TimelineLabel,
    pub zoom: ZoomLevel,
    pub zoom_label: String,
    pub pixels_per_minute: f64,
    pub total_height_minutes: Minutes,
    pub total_height_px: f64,
    pub width_px: f64,
    pub lanes: Vec<Lane>,
    pub grid_lines: Vec<GridLine>,
    pub day_bands: Vec<DayBand>,
}

/// The result of laying out a timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TimelineRender {
    /// The timeline has no events (no axis is built)
    Empty {
        timeline_id: TimelineLabel,
        message: String,
    },

    /// The timeline can't be laid out (e.g. an event ID is repeated).  Only
    /// this timeline is affected; the rest of the document is still drawn.
    Invalid {
        timeline_id: TimelineLabel,
        message: String,
    },

    /// The timeline is laid out
    Ready(TimelineLayout),
}

impl TimelineRender {
    pub fn timeline_id(&self) -> &TimelineLabel {
        match self {
            TimelineRender::Empty { timeline_id, .. }
            | TimelineRender::Invalid { timeline_id, .. } => timeline_id,
            TimelineRender::Ready(layout) => &layout.timeline_id,
        }
    }

    /// Borrow the layout (if there is one)
    pub fn layout(&self) -> Option<&TimelineLayout> {
        match self {
            TimelineRender::Empty { .. } | TimelineRender::Invalid { .. } => None,
            TimelineRender::Ready(layout) => Some(layout),
        }
    }
}

/// The result of laying out a whole document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentRender {
    /// There is no valid document (never partial or stale geometry)
    NoData {
        message: String,
        reason: Option<String>,
    },

    /// One result per timeline, in document order
    Timelines { timelines: Vec<TimelineRender> },
}

impl DocumentRender {
    /// The no-data result, optionally with the reason the document couldn't be
    /// loaded
    pub fn no_data(reason: Option<String>) -> Self {
        DocumentRender::NoData {
            message: NO_DATA_MESSAGE.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_core::{CategoryKey, Duration, TimeOfDay};
    use lane_timeline_macros::{day, duration, time_of_day};

    #[test]
    fn tooltip() {
        let event = Event::from(
            EventId::new("e1"),
            EntityKey::new("Alice"),
            CategoryKey::new("meeting"),
            String::from("Planning"),
            day!(0),
            time_of_day!(540),
            duration!(45),
        );
        let tooltip = Tooltip::from_event(&event);
        assert_eq!(tooltip.duration, "45 min");
        assert_eq!(tooltip.text(), "meeting\nPlanning\n45 min");
    }

    #[test]
    fn tagged_serialisation() {
        let empty = TimelineRender::Empty {
            timeline_id: TimelineLabel::new("t"),
            message: NO_EVENTS_MESSAGE.to_string(),
        };
        let json = serde_json::to_value(&empty).unwrap();
        assert_eq!(json["status"], "empty");
        assert_eq!(json["timeline_id"], "t");
        assert!(empty.layout().is_none());

        let no_data = serde_json::to_value(DocumentRender::no_data(None)).unwrap();
        assert_eq!(no_data["status"], "no_data");
        assert_eq!(no_data["message"], NO_DATA_MESSAGE);
    }
}
