// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Lane Timeline project*
//!
//! This crate defines the basic datatypes used across the Lane Timeline
//! project (renderer, command line tools).
//!
//! A document holds a category colour table and any number of timelines.  Each
//! timeline holds events, and each event belongs to an entity (a lane), starts
//! on a 0-based day at a time of day, and lasts a positive number of minutes.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.  Parsing a document
//! either succeeds with every field in range or fails with a
//! [`DocumentError`]; nothing is partially loaded.  Checks that span events
//! (unique event IDs) are left to [`Timeline::validate`] so that one bad
//! timeline doesn't stop the others being drawn.
//!

mod document;
mod event;
mod key;
mod time;
mod timeline;

pub use document::*;
pub use event::*;
pub use key::*;
pub use time::*;
pub use timeline::*;
