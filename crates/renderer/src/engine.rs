// SPDX-License-Identifier: MIT

//!
//! The `lane-timeline-renderer` engine
//!

mod aggregate;
mod axis;
mod cache;
mod colours;
mod geometry;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod zoom;

pub(crate) use helpers::*;

pub use aggregate::*;
pub use axis::*;
pub use cache::*;
pub use colours::*;
pub use geometry::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;
pub use zoom::*;

use crate::{CategoryColours, RenderConfig};
use lane_timeline_core::{DocumentError, InputDocument, Timeline, ZoomLevel, format_clock};
use log::{debug, trace, warn};
use std::rc::Rc;

/// Lay out one timeline at a zoom level.
///
/// A timeline without events short-circuits to [`TimelineRender::Empty`]: no
/// axis is built and there are no gridlines.  A timeline that fails validation
/// becomes [`TimelineRender::Invalid`].
pub fn render_timeline(
    timeline: &Timeline,
    colours: &CategoryColours,
    zoom: ZoomLevel,
    config: &RenderConfig,
) -> TimelineRender {
    if let Err(error) = timeline.validate() {
        warn!("Not laying out timeline `{}`: {error}", timeline.timeline_id());
        return TimelineRender::Invalid {
            timeline_id: timeline.timeline_id().clone(),
            message: error.to_string(),
        };
    }

    let aggregation = aggregate(timeline.events());
    let Some(max_day) = aggregation.max_day() else {
        trace!("timeline `{}` has no events", timeline.timeline_id());
        return TimelineRender::Empty {
            timeline_id: timeline.timeline_id().clone(),
            message: NO_EVENTS_MESSAGE.to_string(),
        };
    };

    let layout = &config.layout;
    let axis = Axis::build(aggregation.day_bounds(), max_day, zoom);
    let scale = Scale::from(layout.grid_unit_height_px, zoom);
    let total_height_px = scale.to_px(axis.total_height());

    // Lanes (one per entity, in discovery order)
    let lanes: Vec<Lane> = aggregation
        .entities()
        .iter()
        .enumerate()
        .map(|(lane_index, entity)| {
            let lane_x = layout.lane_x(lane_index);
            let events = aggregation
                .lane_events(entity)
                .filter_map(|event| {
                    let position = axis.position(event.start_day(), event.start_time())?;
                    let span = scale.span(position, event.duration().minutes());
                    Some(EventBox {
                        id: event.id().clone(),
                        day: event.start_day(),
                        position_and_size: PositionAndSize {
                            position: Position {
                                x: layout.event_x(lane_x),
                                y: span.top,
                            },
                            width: layout.event_width_px,
                            height: span.height,
                        },
                        colour: colours.event_colour(event).to_string(),
                        tooltip: Tooltip::from_event(event),
                    })
                })
                .collect();
            Lane {
                entity: (*entity).clone(),
                position_and_size: PositionAndSize {
                    position: Position { x: lane_x, y: 0.0 },
                    width: layout.lane_width_px,
                    height: total_height_px,
                },
                events,
            }
        })
        .collect();

    // Gridlines, each labelled relative to the start of its own day
    let grid_lines: Vec<GridLine> = axis
        .grid_lines()
        .map(|minutes| {
            let day = axis.day_at(minutes);
            let day_start = axis.day_offset(day).unwrap_or(0);
            GridLine {
                minutes,
                day,
                top_px: scale.to_px(minutes),
                label: format_clock(minutes - day_start),
            }
        })
        .collect();

    // Day backgrounds
    let day_bands: Vec<DayBand> = axis
        .days()
        .filter_map(|day| {
            let (start, end) = axis.day_span(day)?;
            Some(DayBand {
                day,
                top_px: scale.to_px(start),
                height_px: scale.to_px(end - start),
                colour: config.colours.day_background(day),
            })
        })
        .collect();

    debug!(
        "laid out timeline `{}` at {zoom} min per grid unit: {} lane(s), {} gridline(s)",
        timeline.timeline_id(),
        lanes.len(),
        grid_lines.len()
    );

    TimelineRender::Ready(TimelineLayout {
        timeline_id: timeline.timeline_id().clone(),
        zoom,
        zoom_label: zoom_label(zoom),
        pixels_per_minute: scale.pixels_per_minute(),
        total_height_minutes: axis.total_height(),
        total_height_px,
        width_px: layout.timeline_width(lanes.len()),
        lanes,
        grid_lines,
        day_bands,
    })
}

/// Lay out every timeline in a document (in document order)
pub fn render_document(document: &InputDocument, zoom: ZoomLevel, config: &RenderConfig) -> DocumentRender {
    let colours = CategoryColours::from(document.category_colours());
    let timelines = document
        .timelines()
        .iter()
        .map(|timeline| render_timeline(timeline, &colours, zoom, config))
        .collect();
    DocumentRender::Timelines { timelines }
}

/// The core `lane-timeline-renderer` engine.  This holds the loaded document,
/// the zoom level, and the render config, and memoizes layouts so that
/// rendering repeatedly (e.g. every frame) is cheap
#[derive(Debug)]
pub struct Engine {
    /// The loaded document (if any)
    document: Option<InputDocument>,

    /// The fingerprint of the loaded document
    fingerprint: u64,

    /// Why the last load failed (cleared by a successful load)
    load_error: Option<String>,

    /// Minutes per grid unit
    zoom: ZoomLevel,

    config: RenderConfig,

    cache: LayoutCache,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Engine {
    /// Create a new engine with no document, at the config's default zoom
    pub fn new(config: RenderConfig) -> Self {
        Self {
            document: None,
            fingerprint: 0,
            load_error: None,
            zoom: config.default_zoom,
            config,
            cache: LayoutCache::new(),
        }
    }

    /// Parse and load a document.  On failure any previously loaded document
    /// is dropped, so rendering shows the no-data state rather than stale
    /// geometry.
    pub fn load_json(&mut self, json: &str) -> Result<(), DocumentError> {
        match InputDocument::from_json(json) {
            Ok(document) => {
                self.set_document(document);
                Ok(())
            }
            Err(error) => {
                warn!("Discarding document: {error}");
                self.document = None;
                self.load_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Load an already parsed document.  Layouts cached for other documents
    /// are dropped.
    pub fn set_document(&mut self, document: InputDocument) {
        self.fingerprint = document_fingerprint(&document);
        self.cache.retain_fingerprint(self.fingerprint);
        debug!(
            "loaded document with {} timeline(s) (fingerprint {:016x})",
            document.timelines().len(),
            self.fingerprint
        );
        self.document = Some(document);
        self.load_error = None;
    }

    pub fn clear_document(&mut self) {
        self.document = None;
        self.load_error = None;
    }

    pub fn document(&self) -> Option<&InputDocument> {
        self.document.as_ref()
    }

    /// Why the last load failed (if it did)
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the render config.  Cached layouts were made with the old config
    /// so they're dropped.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
        self.cache.clear();
    }

    /// Get the current zoom level
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    /// Set the zoom level.  Any level is accepted, not only those offered by
    /// the config's zoom levels.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        trace!("zoom set to {zoom}");
        self.zoom = zoom;
    }

    /// Step to the next finer zoom level.  Returns whether the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        match self.config.zoom_levels.zoom_in(self.zoom) {
            Some(zoom) => {
                self.set_zoom(zoom);
                true
            }
            None => false,
        }
    }

    /// Step to the next coarser zoom level.  Returns whether the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        match self.config.zoom_levels.zoom_out(self.zoom) {
            Some(zoom) => {
                self.set_zoom(zoom);
                true
            }
            None => false,
        }
    }

    /// A short label for the current zoom level (e.g. `30min`)
    pub fn zoom_label(&self) -> String {
        zoom_label(self.zoom)
    }

    /// Lay out the loaded document at the current zoom level
    pub fn render(&mut self) -> Rc<DocumentRender> {
        let Some(document) = &self.document else {
            return Rc::new(DocumentRender::no_data(self.load_error.clone()));
        };
        let (zoom, config) = (self.zoom, &self.config);
        self.cache
            .get_or_insert_with(self.fingerprint, zoom, || render_document(document, zoom, config))
    }

    /// Drop every memoized layout
    pub fn invalidate_cache(&mut self) {
        self.cache.clear();
    }

    /// The number of memoized layouts
    pub fn cached_layouts(&self) -> usize {
        self.cache.len()
    }
}
