// SPDX-License-Identifier: MIT

//!
//! Resolve the colour each event is drawn in from its category
//!

use lane_timeline_core::{CategoryColour, CategoryKey, Event};

/// The colour used for events whose category has no entry in the table
pub const FALLBACK_EVENT_COLOUR: &str = "oklch(26.8% 0.007 34.298)";

/// The category colour lookup table.  Searched in order; the first entry for a
/// category wins.
///
/// Colours are CSS colour strings and are handed to the display layer as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryColours(Vec<(CategoryKey, String)>);

impl CategoryColours {
    /// Create new (empty) CategoryColours
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add<S: Into<String>>(&mut self, category: CategoryKey, colour: S) {
        self.0.push((category, colour.into()));
    }

    /// Get the colour for the category (if there is one)
    pub fn category_colour(&self, category: &CategoryKey) -> Option<&str> {
        self.0
            .iter()
            .find(|(known_category, _)| known_category == category)
            .map(|(_, colour)| colour.as_str())
    }

    /// Get the colour for an event based on its category, falling back to
    /// [`FALLBACK_EVENT_COLOUR`]
    pub fn event_colour(&self, event: &Event) -> &str {
        self.category_colour(event.category())
            .unwrap_or(FALLBACK_EVENT_COLOUR)
    }
}

impl From<&[CategoryColour]> for CategoryColours {
    fn from(table: &[CategoryColour]) -> Self {
        let mut colours = Self::new();
        for entry in table {
            colours.add(entry.category.clone(), entry.colour.clone());
        }
        colours
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_core::{DayIndex, Duration, EntityKey, EventId, TimeOfDay};
    use lane_timeline_macros::{day, duration, time_of_day};

    fn event_with_category(category: &str) -> Event {
        Event::from(
            EventId::new("e"),
            EntityKey::new("Alice"),
            CategoryKey::new(category),
            String::new(),
            day!(0),
            time_of_day!(0),
            duration!(10),
        )
    }

    #[test]
    fn first_match_wins() {
        let table = vec![
            CategoryColour::from(CategoryKey::new("work"), "#ff0000"),
            CategoryColour::from(CategoryKey::new("rest"), "teal"),
            CategoryColour::from(CategoryKey::new("work"), "#00ff00"),
        ];
        let colours = CategoryColours::from(table.as_slice());
        assert_eq!(
            colours.category_colour(&CategoryKey::new("work")),
            Some("#ff0000")
        );
        assert_eq!(
            colours.event_colour(&event_with_category("rest")),
            "teal"
        );
    }

    #[test]
    fn unknown_category_uses_fallback() {
        let mut colours = CategoryColours::new();
        colours.add(CategoryKey::new("work"), "#ff0000");
        assert_eq!(colours.category_colour(&CategoryKey::new("play")), None);
        assert_eq!(
            colours.event_colour(&event_with_category("play")),
            FALLBACK_EVENT_COLOUR
        );
        assert_eq!(
            CategoryColours::new().event_colour(&event_with_category("work")),
            FALLBACK_EVENT_COLOUR
        );
    }
}
