// SPDX-License-Identifier: MIT

//!
//! The input document: the category colour table and the timelines to draw
//!

use crate::{CategoryKey, Timeline};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// Errors that can arise when loading an [`InputDocument`]
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not JSON, or the JSON doesn't match the document schema
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps an event category to the colour its events are drawn in.  The colour
/// is any CSS colour value (e.g. `#ff0000`, `teal`, `oklch(70% 0.1 200)`) and
/// is passed through to the display layer untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryColour {
    pub category: CategoryKey,
    pub colour: String,
}

impl CategoryColour {
    pub fn from<S: Into<String>>(category: CategoryKey, colour: S) -> Self {
        Self {
            category,
            colour: colour.into(),
        }
    }
}

/// Everything needed to draw one or more timelines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct InputDocument {
    /// The colour lookup table (first match wins)
    category_colours: Vec<CategoryColour>,

    /// The timelines, drawn in this order
    timelines: Vec<Timeline>,
}

impl InputDocument {
    /// Create an [`InputDocument`]
    pub fn from(category_colours: Vec<CategoryColour>, timelines: Vec<Timeline>) -> Self {
        Self {
            category_colours,
            timelines,
        }
    }

    /// Parse and validate a document from JSON text
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: InputDocument = serde_json::from_str(json).inspect_err(|error| {
            warn!("Error parsing JSON document: {error}");
        })?;
        debug!(
            "Parsed document with {} timeline(s) and {} category colour(s)",
            document.timelines.len(),
            document.category_colours.len()
        );
        Ok(document)
    }

    /// Parse and validate a document from a reader (e.g. an uploaded file)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let document: InputDocument = serde_json::from_reader(reader).inspect_err(|error| {
            warn!("Error parsing JSON document: {error}");
        })?;
        Ok(document)
    }

    /// Borrow the category colour table
    pub fn category_colours(&self) -> &[CategoryColour] {
        &self.category_colours
    }

    /// Borrow the timelines
    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }
}
