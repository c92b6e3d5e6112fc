// SPDX-License-Identifier: MIT

//!
//! Group a timeline's events by entity and by day, and find how long each day
//! needs to be
//!

use lane_timeline_core::{DayIndex, EntityKey, Event, Minutes};
use log::trace;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The latest event end time observed on each day (across all entities).
/// Days without events are absent, and are treated as having no extent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayBounds(BTreeMap<DayIndex, Minutes>);

impl DayBounds {
    /// The bound for a day (0 if no event starts on it)
    pub fn bound(&self, day: DayIndex) -> Minutes {
        self.0.get(&day).copied().unwrap_or(0)
    }

    /// The largest day on which an event starts (`None` if there are no
    /// events)
    pub fn max_day(&self) -> Option<DayIndex> {
        self.0.keys().next_back().copied()
    }

    /// Iterate over the days that have events, in day order
    pub fn iter(&self) -> impl Iterator<Item = (DayIndex, Minutes)> + '_ {
        self.0.iter().map(|(day, bound)| (*day, *bound))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raise the bound for a day to `end` if it's later than the current one
    fn extend(&mut self, day: DayIndex, end: Minutes) {
        let bound = self.0.entry(day).or_insert(0);
        *bound = (*bound).max(end);
    }
}

/// A timeline's events grouped for laying out.  Borrows the events, which are
/// never modified.
#[derive(Debug, Default, Clone)]
pub struct Aggregation<'a> {
    /// Every distinct entity, in the order first seen in the input
    entities: Vec<&'a EntityKey>,

    /// Each entity's events, by day, sorted by start time
    entity_timelines: HashMap<&'a EntityKey, BTreeMap<DayIndex, Vec<&'a Event>>>,

    /// The latest event end time on each day
    day_bounds: DayBounds,
}

impl<'a> Aggregation<'a> {
    /// Borrow the distinct entities (lane order)
    pub fn entities(&self) -> &[&'a EntityKey] {
        &self.entities
    }

    /// Borrow an entity's events, grouped by day
    pub fn entity_timeline(&self, entity: &EntityKey) -> Option<&BTreeMap<DayIndex, Vec<&'a Event>>> {
        self.entity_timelines.get(entity)
    }

    /// All of an entity's events, ordered by day and then start time
    pub fn lane_events(&self, entity: &EntityKey) -> impl Iterator<Item = &'a Event> + '_ {
        self.entity_timelines
            .get(entity)
            .into_iter()
            .flat_map(|days| days.values())
            .flat_map(|events| events.iter().copied())
    }

    /// Borrow the day bounds
    pub fn day_bounds(&self) -> &DayBounds {
        &self.day_bounds
    }

    /// The largest day on which an event starts (`None` if there are no
    /// events, in which case there is nothing to lay out)
    pub fn max_day(&self) -> Option<DayIndex> {
        self.day_bounds.max_day()
    }

    /// Whether there were no events
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Group events by entity and day, and calculate the day bounds.
///
/// The events are sorted by `(start_day, start_time)` with a stable sort, so
/// events that start at the same time keep their input order.  The entity
/// order is the order in which entities are first seen in the (unsorted) input.
pub fn aggregate(events: &[Event]) -> Aggregation<'_> {
    // Distinct entities in discovery order
    let mut seen = HashSet::new();
    let entities: Vec<&EntityKey> = events
        .iter()
        .map(|event| event.entity())
        .filter(|entity| seen.insert(*entity))
        .collect();

    // Stable sort by day then time
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| (event.start_day(), event.start_time()));

    let mut entity_timelines: HashMap<&EntityKey, BTreeMap<DayIndex, Vec<&Event>>> =
        HashMap::new();
    let mut day_bounds = DayBounds::default();
    for event in sorted {
        entity_timelines
            .entry(event.entity())
            .or_default()
            .entry(event.start_day())
            .or_default()
            .push(event);
        day_bounds.extend(event.start_day(), event.end_time());
    }

    trace!(
        "aggregated {} event(s) into {} entit(y/ies) over {} day(s) with events",
        events.len(),
        entities.len(),
        day_bounds.0.len()
    );

    Aggregation {
        entities,
        entity_timelines,
        day_bounds,
    }
}
