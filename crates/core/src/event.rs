// SPDX-License-Identifier: MIT

//!
//! The lane timeline event type
//!

use crate::{CategoryKey, DayIndex, Duration, EntityKey, EventId, Minutes, TimeOfDay};
use serde::{Deserialize, Serialize};

/// A single time-boxed event on a timeline.
///
/// Every field is validated by its type when the event is created (or
/// deserialised), so an `Event` that exists is always well formed.  The end of
/// an event may fall after midnight; it is never clipped to its day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// The event's ID (unique within its timeline)
    id: EventId,

    /// The entity (lane) the event belongs to
    entity: EntityKey,

    /// The event's category (used for colouring)
    category: CategoryKey,

    /// Free text describing the event
    description: String,

    /// The day on which the event starts
    start_day: DayIndex,

    /// The time (minutes since the start of `start_day`) at which the event
    /// starts
    start_time: TimeOfDay,

    /// How long the event lasts
    duration: Duration,
}

impl Event {
    /// Create an [`Event`]
    pub fn from(
        id: EventId,
        entity: EntityKey,
        category: CategoryKey,
        description: String,
        start_day: DayIndex,
        start_time: TimeOfDay,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            entity,
            category,
            description,
            start_day,
            start_time,
            duration,
        }
    }

    /// Borrow the event's ID
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// Borrow the event's entity key
    pub fn entity(&self) -> &EntityKey {
        &self.entity
    }

    /// Borrow the event's category key
    pub fn category(&self) -> &CategoryKey {
        &self.category
    }

    /// Borrow the event's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the day on which the event starts
    pub fn start_day(&self) -> DayIndex {
        self.start_day
    }

    /// Get the time of day at which the event starts
    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    /// Get the event's duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The time (minutes since the start of `start_day`) at which the event
    /// ends.  May be greater than a day's worth of minutes.
    pub fn end_time(&self) -> Minutes {
        self.start_time.minutes() + self.duration.minutes()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_macros::{day, duration, time_of_day};

    fn valid_event() -> Event {
        Event::from(
            EventId::new("e1"),
            EntityKey::new("Alice"),
            CategoryKey::new("work"),
            String::from("Standup"),
            day!(2),
            time_of_day!(540),
            duration!(15),
        )
    }

    #[test]
    fn getters() {
        let event = valid_event();
        assert_eq!(event.id().as_str(), "e1");
        assert_eq!(event.entity().as_str(), "Alice");
        assert_eq!(event.category().as_str(), "work");
        assert_eq!(event.description(), "Standup");
        assert_eq!(event.start_day(), day!(2));
        assert_eq!(event.start_time(), time_of_day!(540));
        assert_eq!(event.duration(), duration!(15));
        assert_eq!(event.end_time(), 555);
    }

    #[test]
    fn end_time_past_midnight_is_not_clipped() {
        let event = Event::from(
            EventId::new("late"),
            EntityKey::new("Bob"),
            CategoryKey::new("shift"),
            String::from("Night shift"),
            day!(0),
            time_of_day!(1320),
            duration!(480),
        );
        assert_eq!(event.end_time(), 1800);
    }

    #[test]
    fn deserialisation() {
        let json = r#"{
            "id": "e1",
            "entity": "Alice",
            "category": "work",
            "description": "Standup",
            "start_day": 2,
            "start_time": 540,
            "duration": 15
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event, valid_event());

        // Out of range start time
        let json = json.replace("540", "1440");
        assert!(serde_json::from_str::<Event>(&json).is_err());

        // Missing field
        let json = r#"{"id": "e1", "entity": "Alice"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
