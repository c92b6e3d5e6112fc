// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use lane_timeline_core::{DayIndex, Minutes, ZoomLevel};

/// Round a number of minutes up to a whole number of grid units
pub(crate) fn ceil_to_grid_unit(minutes: Minutes, zoom: ZoomLevel) -> Minutes {
    minutes.div_ceil(zoom.minutes()) * zoom.minutes()
}

/// Every day index from day 0 up to and including `max_day`
pub(crate) fn days_up_to(max_day: DayIndex) -> impl Iterator<Item = DayIndex> + Clone {
    (0..=max_day.value()).filter_map(|day| DayIndex::try_from(i64::from(day)).ok())
}

/// Escape text for use in XML (SVG) content and attribute values
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod test {
    use super::*;
    use lane_timeline_macros::{day, zoom};

    #[test]
    fn test_ceil_to_grid_unit() {
        assert_eq!(ceil_to_grid_unit(0, zoom!(30)), 0);
        assert_eq!(ceil_to_grid_unit(1, zoom!(30)), 30);
        assert_eq!(ceil_to_grid_unit(30, zoom!(30)), 30);
        assert_eq!(ceil_to_grid_unit(70, zoom!(30)), 90);
        assert_eq!(ceil_to_grid_unit(600, zoom!(450)), 900);
        assert_eq!(ceil_to_grid_unit(7, zoom!(1)), 7);
    }

    #[test]
    fn test_days_up_to() {
        let days: Vec<u32> = days_up_to(day!(3)).map(|day| day.value()).collect();
        assert_eq!(days, vec![0, 1, 2, 3]);
        assert_eq!(days_up_to(day!(0)).count(), 1);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_xml(r#""Bob's""#), "&quot;Bob&apos;s&quot;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
