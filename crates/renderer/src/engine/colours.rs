// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use crate::colour::Colour;
use lane_timeline_core::DayIndex;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

/// Day slots alternate between the two colours (`a` for even days)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackgroundColours {
    pub a: Colour,
    pub b: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineColours {
    pub day_background: BackgroundColours,
    pub grid_line: LineStyle,
    pub label_text: Colour,
    pub heading_text: Colour,
}

impl TimelineColours {
    /// The background colour of a day's slot
    pub fn day_background(&self, day: DayIndex) -> Colour {
        if day.value() % 2 == 0 {
            self.day_background.a
        } else {
            self.day_background.b
        }
    }
}

impl Default for TimelineColours {
    fn default() -> Self {
        Self {
            day_background: BackgroundColours {
                a: Colour::from_rgb(0xf3, 0xf4, 0xf6),
                b: Colour::from_rgb(0xff, 0xff, 0xff),
            },
            grid_line: LineStyle {
                colour: Colour::from_rgb(0xe5, 0xe7, 0xeb),
                thickness: 1.0,
            },
            label_text: Colour::from_rgb(0x6b, 0x72, 0x80),
            heading_text: Colour::from_rgb(0, 0, 0),
        }
    }
}
