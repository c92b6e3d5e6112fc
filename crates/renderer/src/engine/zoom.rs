// SPDX-License-Identifier: MIT

//!
//! Zoom levels
//!

use lane_timeline_core::ZoomLevel;
use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;
use thiserror::Error;

/// Create a zoom level in a `const` context (a zero fails to compile)
const fn minutes_per_grid_unit(minutes: u32) -> ZoomLevel {
    match NonZeroU32::new(minutes) {
        Some(minutes) => ZoomLevel::from_non_zero(minutes),
        None => panic!("A zoom level must be a positive number of minutes"),
    }
}

/// The zoom levels offered by default: 5min, 15min, 30min, 1h, 2h, 4h, 7.5h
pub const DEFAULT_ZOOM_LEVELS: [ZoomLevel; 7] = [
    minutes_per_grid_unit(5),
    minutes_per_grid_unit(15),
    minutes_per_grid_unit(30),
    minutes_per_grid_unit(60),
    minutes_per_grid_unit(120),
    minutes_per_grid_unit(240),
    minutes_per_grid_unit(450),
];

/// The zoom level used until another is chosen
pub const DEFAULT_ZOOM_LEVEL: ZoomLevel = minutes_per_grid_unit(30);

/// Errors that can arise in relation to [`ZoomLevels`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoomLevelsError {
    #[error("At least one zoom level is required")]
    Empty,

    #[error("Zoom levels must be in strictly ascending order")]
    NotAscending,
}

/// The ordered set of zoom levels a user can step through.  The engine accepts
/// any positive zoom level; this only governs stepping in and out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ZoomLevels(Vec<ZoomLevel>);

impl Default for ZoomLevels {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_LEVELS.to_vec())
    }
}

impl ZoomLevels {
    /// Create valid [`ZoomLevels`] (non-empty, strictly ascending)
    pub fn from(levels: Vec<ZoomLevel>) -> Result<Self, ZoomLevelsError> {
        if levels.is_empty() {
            return Err(ZoomLevelsError::Empty);
        }
        if !levels.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ZoomLevelsError::NotAscending);
        }
        Ok(Self(levels))
    }

    /// Borrow the levels (finest first)
    pub fn levels(&self) -> &[ZoomLevel] {
        &self.0
    }

    pub fn contains(&self, zoom: ZoomLevel) -> bool {
        self.0.contains(&zoom)
    }

    /// The next finer level (fewer minutes per grid unit), if there is one
    pub fn zoom_in(&self, current: ZoomLevel) -> Option<ZoomLevel> {
        let index = self.0.iter().position(|level| *level == current)?;
        index.checked_sub(1).map(|index| self.0[index])
    }

    /// The next coarser level (more minutes per grid unit), if there is one
    pub fn zoom_out(&self, current: ZoomLevel) -> Option<ZoomLevel> {
        let index = self.0.iter().position(|level| *level == current)?;
        self.0.get(index + 1).copied()
    }
}

impl<'de> Deserialize<'de> for ZoomLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let levels = Vec::<ZoomLevel>::deserialize(deserializer)?;
        ZoomLevels::from(levels).map_err(serde::de::Error::custom)
    }
}

/// A short label for a zoom level: minutes below an hour (e.g. `15min`),
/// otherwise hours (e.g. `1h`, `7.5h`)
pub fn zoom_label(zoom: ZoomLevel) -> String {
    let minutes = zoom.value();
    if minutes < 60 {
        format!("{minutes}min")
    } else {
        format!("{}h", f64::from(minutes) / 60.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_macros::zoom;

    #[test]
    fn from() {
        assert_eq!(ZoomLevels::from(Vec::new()), Err(ZoomLevelsError::Empty));
        assert_eq!(
            ZoomLevels::from(vec![zoom!(30), zoom!(15)]),
            Err(ZoomLevelsError::NotAscending)
        );
        assert_eq!(
            ZoomLevels::from(vec![zoom!(15), zoom!(15)]),
            Err(ZoomLevelsError::NotAscending)
        );
        assert!(ZoomLevels::from(vec![zoom!(10)]).is_ok());
    }

    #[test]
    fn stepping() {
        let levels = ZoomLevels::default();
        assert_eq!(levels.zoom_in(zoom!(30)), Some(zoom!(15)));
        assert_eq!(levels.zoom_out(zoom!(30)), Some(zoom!(60)));

        // Ends
        assert_eq!(levels.zoom_in(zoom!(5)), None);
        assert_eq!(levels.zoom_out(zoom!(450)), None);

        // Not one of the levels
        assert_eq!(levels.zoom_in(zoom!(45)), None);
        assert_eq!(levels.zoom_out(zoom!(45)), None);
        assert!(!levels.contains(zoom!(45)));
        assert!(levels.contains(DEFAULT_ZOOM_LEVEL));
    }

    #[test]
    fn labels() {
        assert_eq!(zoom_label(zoom!(5)), "5min");
        assert_eq!(zoom_label(zoom!(30)), "30min");
        assert_eq!(zoom_label(zoom!(60)), "1h");
        assert_eq!(zoom_label(zoom!(240)), "4h");
        assert_eq!(zoom_label(zoom!(450)), "7.5h");
    }

    #[test]
    fn deserialisation() {
        let levels: ZoomLevels = serde_json::from_str("[10, 20, 40]").unwrap();
        assert_eq!(levels.levels(), &[zoom!(10), zoom!(20), zoom!(40)]);
        assert!(serde_json::from_str::<ZoomLevels>("[]").is_err());
        assert!(serde_json::from_str::<ZoomLevels>("[20, 10]").is_err());
        assert!(serde_json::from_str::<ZoomLevels>("[0, 10]").is_err());
    }
}
