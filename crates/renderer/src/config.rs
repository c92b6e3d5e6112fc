// SPDX-License-Identifier: MIT

//!
//! Render config
//!

use crate::{DEFAULT_ZOOM_LEVEL, LayoutParams, TimelineColours, ZoomLevels};
use lane_timeline_core::ZoomLevel;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading a [`RenderConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The default zoom level ({0}) is not one of the zoom levels")]
    DefaultZoomNotAllowed(ZoomLevel),

    #[error("Layout sizes must be finite, positive (gaps may be zero), and events no wider than lanes")]
    InvalidLayout,
}

/// Everything about how timelines are drawn that doesn't come from the
/// document.  Any field missing from a config file takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub layout: LayoutParams,
    pub colours: TimelineColours,
    pub zoom_levels: ZoomLevels,
    pub default_zoom: ZoomLevel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            colours: TimelineColours::default(),
            zoom_levels: ZoomLevels::default(),
            default_zoom: DEFAULT_ZOOM_LEVEL,
        }
    }
}

impl RenderConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading render config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        info!("Render config loaded = {config:?}");
        Ok(config)
    }

    /// Parse and validate a config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values are usable together
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zoom_levels.contains(self.default_zoom) {
            return Err(ConfigError::DefaultZoomNotAllowed(self.default_zoom));
        }
        if !self.layout.is_valid() {
            return Err(ConfigError::InvalidLayout);
        }
        Ok(())
    }
}
