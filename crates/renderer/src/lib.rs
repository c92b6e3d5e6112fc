// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lane Timeline project*
//!
//! This crate lays out multi-entity, multi-day timelines.  Each timeline is
//! drawn as one lane per entity against a single shared vertical time axis on
//! which the days are stacked end to end.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Grouping events by entity and day, and finding each day's extent
//! - Building the axis (where each day starts, and the gridlines)
//! - Mapping axis minutes to pixels for the current zoom level
//! - Resolving the colour of each event from its category
//! - Memoizing layouts so that rendering repeatedly is cheap
//!
//! The output is plain data (boxes, lines, labels) for any display layer to
//! draw.  The rest of the crate holds frontends that do so; currently there is
//! only SVG.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = Engine::new(RenderConfig::default());
//! engine.load_json(&json)?;
//! let svg = document_svg(&engine.render(), engine.config());
//! ```
//!

pub mod colour;
pub mod colours;
pub mod config;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use colours::*;
pub use config::*;
pub use engine::*;
pub use frontends::svg::{document_svg, timeline_svg};
