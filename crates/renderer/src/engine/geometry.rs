// SPDX-License-Identifier: MIT

//!
//! Convert axis minutes into pixels
//!

use lane_timeline_core::{Minutes, ZoomLevel};
use serde::Serialize;

/// The top and height (pixels) of something drawn against the axis
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalSpan {
    pub top: f64,
    pub height: f64,
}

/// The vertical scale of the axis for a zoom level.
///
/// A grid unit is always drawn `grid_unit_height_px` tall, so zooming in (fewer
/// minutes per grid unit) stretches every minute, and every position and
/// length scales by the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pixels_per_minute: f64,
}

impl Scale {
    /// Create the scale for a zoom level, given the pixel height of one grid
    /// unit
    pub fn from(grid_unit_height_px: f64, zoom: ZoomLevel) -> Self {
        Self {
            pixels_per_minute: grid_unit_height_px / f64::from(zoom.value()),
        }
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_minute
    }

    /// Convert minutes to pixels
    pub fn to_px(&self, minutes: Minutes) -> f64 {
        minutes as f64 * self.pixels_per_minute
    }

    /// Get the pixel span of something at `position` on the axis lasting
    /// `duration` minutes
    pub fn span(&self, position: Minutes, duration: Minutes) -> VerticalSpan {
        VerticalSpan {
            top: self.to_px(position),
            height: self.to_px(duration),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_macros::zoom;

    #[test]
    fn pixels_per_minute() {
        assert_eq!(Scale::from(80.0, zoom!(30)).pixels_per_minute(), 80.0 / 30.0);
        assert_eq!(Scale::from(80.0, zoom!(5)).pixels_per_minute(), 16.0);
    }

    #[test]
    fn span() {
        let scale = Scale::from(80.0, zoom!(20));
        let span = scale.span(90, 30);
        assert_eq!(span.top, 360.0);
        assert_eq!(span.height, 120.0);

        // A grid unit is always one grid unit tall
        assert_eq!(Scale::from(80.0, zoom!(40)).to_px(40), 80.0);
    }

    #[test]
    fn zoom_rescales_linearly() {
        let coarse = Scale::from(80.0, zoom!(60));
        let fine = Scale::from(80.0, zoom!(15));
        for (position, duration) in [(0, 15), (60, 30), (600, 120), (1455, 45)] {
            let coarse_span = coarse.span(position, duration);
            let fine_span = fine.span(position, duration);
            assert_eq!(fine_span.top, coarse_span.top * 4.0);
            assert_eq!(fine_span.height, coarse_span.height * 4.0);
        }
    }
}
