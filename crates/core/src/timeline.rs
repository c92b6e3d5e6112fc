// SPDX-License-Identifier: MIT

//!
//! The lane timeline timeline type
//!

use crate::{Event, EventId, TimelineLabel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors that can arise in relation to a [`Timeline`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Event ID `{0}` is used more than once in the timeline")]
    DuplicateEventId(EventId),
}

/// A labelled, ordered collection of [`Event`]s.  The order of the events is
/// the order they were given in, and is significant: events that start at the
/// same time keep that relative order when laid out.
///
/// Event IDs should be unique within a timeline.  A timeline that breaks this
/// still loads (so the rest of its document can be drawn) and
/// [`Timeline::validate`] reports it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timeline {
    /// The timeline's label
    #[serde(rename = "timelineId")]
    timeline_id: TimelineLabel,

    /// The timeline's events
    #[serde(rename = "timeline")]
    events: Vec<Event>,
}

impl Timeline {
    /// Create a [`Timeline`]
    pub fn from(timeline_id: TimelineLabel, events: Vec<Event>) -> Self {
        Self {
            timeline_id,
            events,
        }
    }

    /// Check every event ID is unique (reports the first repeated ID)
    pub fn validate(&self) -> Result<(), TimelineError> {
        let mut seen = BTreeSet::new();
        for event in &self.events {
            if !seen.insert(event.id()) {
                return Err(TimelineError::DuplicateEventId(event.id().clone()));
            }
        }
        Ok(())
    }

    /// Borrow the timeline's label
    pub fn timeline_id(&self) -> &TimelineLabel {
        &self.timeline_id
    }

    /// Borrow the timeline's events (in input order)
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Whether the timeline has no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CategoryKey, DayIndex, Duration, EntityKey, TimeOfDay};
    use lane_timeline_macros::{day, duration, time_of_day};

    fn event(id: &str) -> Event {
        Event::from(
            EventId::new(id),
            EntityKey::new("Alice"),
            CategoryKey::new("work"),
            String::new(),
            day!(0),
            time_of_day!(60),
            duration!(30),
        )
    }

    #[test]
    fn validate() {
        let ok = Timeline::from(TimelineLabel::new("week 1"), vec![event("a"), event("b")]);
        assert_eq!(ok.validate(), Ok(()));

        let duplicate = Timeline::from(
            TimelineLabel::new("week 1"),
            vec![event("a"), event("b"), event("a")],
        );
        assert_eq!(duplicate.events().len(), 3);
        assert_eq!(
            duplicate.validate(),
            Err(TimelineError::DuplicateEventId(EventId::new("a")))
        );

        let empty = Timeline::from(TimelineLabel::new("empty"), Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.validate(), Ok(()));
    }

    #[test]
    fn deserialisation() {
        let json = r#"{
            "timelineId": "week 1",
            "timeline": [
                {"id": "a", "entity": "Alice", "category": "work", "description": "",
                 "start_day": 0, "start_time": 60, "duration": 30}
            ]
        }"#;
        let timeline: Timeline = serde_json::from_str(json).unwrap();
        assert_eq!(timeline.timeline_id().as_str(), "week 1");
        assert_eq!(timeline.events().len(), 1);

        // Round trips through the same field names
        let serialised = serde_json::to_value(&timeline).unwrap();
        assert!(serialised.get("timelineId").is_some());
        assert!(serialised.get("timeline").is_some());

        // Duplicate IDs still load, and are reported by `validate`
        let json = json.replace(
            "]",
            r#", {"id": "a", "entity": "Bob", "category": "work", "description": "",
                 "start_day": 0, "start_time": 90, "duration": 30}]"#,
        );
        let timeline = serde_json::from_str::<Timeline>(&json).unwrap();
        assert_eq!(timeline.events().len(), 2);
        assert!(timeline.validate().is_err());
    }
}
