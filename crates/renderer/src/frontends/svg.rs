// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Draws laid out timelines as standalone SVG documents.  Timelines in a
//! document are drawn side by side, each with its label and lane headings
//! above its axis.
//!

use crate::engine::escape_xml;
use crate::{DocumentRender, Point, Position, RenderConfig, TimelineLayout, TimelineRender};
use log::debug;

/// The number of lanes' worth of width given to a timeline with no events (room
/// for its message)
const EMPTY_TIMELINE_LANES: usize = 4;

/// Draw one timeline as an SVG document
pub fn timeline_svg(render: &TimelineRender, config: &RenderConfig) -> String {
    let size = timeline_size(render, config);
    let mut body = String::new();
    push_timeline(&mut body, render, Position::default(), config);
    wrap_svg(&body, size, config)
}

/// Draw a whole document as an SVG document
pub fn document_svg(render: &DocumentRender, config: &RenderConfig) -> String {
    let layout = &config.layout;
    match render {
        DocumentRender::NoData { message, reason } => {
            let mut body = String::new();
            let mut lines = vec![message.as_str()];
            if let Some(reason) = reason {
                lines.push(reason);
            }
            for (i, line) in lines.iter().enumerate() {
                push_text(
                    &mut body,
                    Position {
                        x: layout.font_size_px,
                        y: layout.font_size_px * (2.0 + 1.5 * i as f64),
                    },
                    line,
                    &config.colours.heading_text.to_hex(),
                    "start",
                );
            }
            let size = Point {
                x: layout.timeline_width(EMPTY_TIMELINE_LANES * 2),
                y: layout.font_size_px * (2.0 + 1.5 * lines.len() as f64),
            };
            wrap_svg(&body, size, config)
        }
        DocumentRender::Timelines { timelines } => {
            let mut body = String::new();
            let mut size = Point::default();
            let mut x = 0.0;
            for (i, timeline) in timelines.iter().enumerate() {
                if i > 0 {
                    x += layout.timeline_gap_px;
                }
                push_timeline(&mut body, timeline, Position { x, y: 0.0 }, config);
                let timeline_size = timeline_size(timeline, config);
                x += timeline_size.x;
                size = size.max(Point {
                    x,
                    y: timeline_size.y,
                });
            }
            debug!("drew {} timeline(s) as SVG", timelines.len());
            wrap_svg(&body, size, config)
        }
    }
}

/// The width (x) and height (y) a timeline takes up when drawn
fn timeline_size(render: &TimelineRender, config: &RenderConfig) -> Point {
    let layout = &config.layout;
    match render {
        TimelineRender::Empty { .. } | TimelineRender::Invalid { .. } => Point {
            x: layout.timeline_width(EMPTY_TIMELINE_LANES),
            y: layout.heading_height_px + layout.font_size_px * 2.0,
        },
        TimelineRender::Ready(timeline) => Point {
            x: timeline.width_px,
            y: layout.heading_height_px + timeline.total_height_px,
        },
    }
}

fn wrap_svg(body: &str, size: Point, config: &RenderConfig) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\" font-size=\"{font}\">\n{body}</svg>\n",
        w = size.x,
        h = size.y,
        font = config.layout.font_size_px,
    )
}

fn push_text(svg: &mut String, position: Position, text: &str, fill: &str, anchor: &str) {
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>\n",
        position.x,
        position.y,
        escape_xml(fill),
        escape_xml(text)
    ));
}

/// Draw a timeline with its top left corner at `origin`
fn push_timeline(svg: &mut String, render: &TimelineRender, origin: Position, config: &RenderConfig) {
    let layout = &config.layout;
    let colours = &config.colours;
    let heading_colour = colours.heading_text.to_hex();

    match render {
        TimelineRender::Empty {
            timeline_id,
            message,
        }
        | TimelineRender::Invalid {
            timeline_id,
            message,
        } => {
            push_text(
                svg,
                Position {
                    x: origin.x,
                    y: origin.y + layout.font_size_px,
                },
                timeline_id.as_str(),
                &heading_colour,
                "start",
            );
            push_text(
                svg,
                Position {
                    x: origin.x,
                    y: origin.y + layout.heading_height_px + layout.font_size_px,
                },
                message,
                &colours.label_text.to_hex(),
                "start",
            );
        }
        TimelineRender::Ready(timeline) => push_timeline_layout(svg, timeline, origin, config),
    }
}

fn push_timeline_layout(svg: &mut String, timeline: &TimelineLayout, origin: Position, config: &RenderConfig) {
    let layout = &config.layout;
    let colours = &config.colours;
    let axis_x = origin.x + layout.gutter_width_px;
    let axis_y = origin.y + layout.heading_height_px;
    let axis_width = timeline.width_px - layout.gutter_width_px;

    svg.push_str(&format!(
        "<g class=\"timeline\" data-zoom=\"{}\">\n",
        timeline.zoom
    ));

    // Heading
    push_text(
        svg,
        Position {
            x: origin.x,
            y: origin.y + layout.font_size_px,
        },
        &format!("{} ({})", timeline.timeline_id, timeline.zoom_label),
        &colours.heading_text.to_hex(),
        "start",
    );

    // Day backgrounds
    for band in &timeline.day_bands {
        svg.push_str(&format!(
            "<rect x=\"{axis_x}\" y=\"{}\" width=\"{axis_width}\" height=\"{}\" fill=\"{}\"/>\n",
            axis_y + band.top_px,
            band.height_px,
            band.colour.to_hex()
        ));
    }

    // Gridlines and their labels
    let grid_colour = colours.grid_line.colour.to_hex();
    let label_colour = colours.label_text.to_hex();
    for line in &timeline.grid_lines {
        let y = axis_y + line.top_px;
        svg.push_str(&format!(
            "<line x1=\"{axis_x}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\" stroke=\"{grid_colour}\" stroke-width=\"{}\"/>\n",
            origin.x + timeline.width_px,
            colours.grid_line.thickness
        ));
        push_text(
            svg,
            Position {
                x: axis_x - 4.0,
                y: y + layout.font_size_px / 3.0,
            },
            &line.label,
            &label_colour,
            "end",
        );
    }

    // Lanes
    for lane in &timeline.lanes {
        let lane_box = &lane.position_and_size;
        push_text(
            svg,
            Position {
                x: origin.x + lane_box.position.x + lane_box.width / 2.0,
                y: axis_y - layout.font_size_px / 2.0,
            },
            lane.entity.as_str(),
            &colours.heading_text.to_hex(),
            "middle",
        );
        for event in &lane.events {
            let event_box = &event.position_and_size;
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"{}\"><title>{}</title></rect>\n",
                origin.x + event_box.position.x,
                axis_y + event_box.position.y,
                event_box.width,
                event_box.height,
                escape_xml(&event.colour),
                escape_xml(&event.tooltip.text())
            ));
        }
    }

    svg.push_str("</g>\n");
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CategoryColours, render_document, render_timeline};
    use lane_timeline_core::{
        CategoryKey, DayIndex, Duration, EntityKey, Event, EventId, InputDocument, TimeOfDay,
        Timeline, TimelineLabel, ZoomLevel,
    };
    use lane_timeline_macros::{day, duration, time_of_day, zoom};

    fn timeline() -> Timeline {
        Timeline::from(
            TimelineLabel::new("Week <1>"),
            vec![Event::from(
                EventId::new("1"),
                EntityKey::new("Alice & Bob"),
                CategoryKey::new("work"),
                String::from("Review \"draft\""),
                day!(0),
                time_of_day!(60),
                duration!(30),
            )],
        )
    }

    #[test]
    fn draws_a_timeline() {
        let config = RenderConfig::default();
        let render = render_timeline(&timeline(), &CategoryColours::new(), zoom!(30), &config);
        let svg = timeline_svg(&render, &config);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("Week &lt;1&gt; (30min)"));
        assert!(svg.contains("Alice &amp; Bob"));
        assert!(svg.contains("<title>work\nReview &quot;draft&quot;\n30 min</title>"));
        assert!(svg.contains(">01:30</text>"));

        // One event and one day band
        assert_eq!(svg.matches("<rect").count(), 2);
        // Gridlines at 0, 30, 60 and 90
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn draws_empty_states() {
        let config = RenderConfig::default();
        let empty = Timeline::from(TimelineLabel::new("Nothing"), Vec::new());
        let render = render_timeline(&empty, &CategoryColours::new(), zoom!(30), &config);
        let svg = timeline_svg(&render, &config);
        assert!(svg.contains("No events to display"));
        assert!(!svg.contains("<line"));

        let svg = document_svg(&DocumentRender::no_data(Some(String::from("bad <json>"))), &config);
        assert!(svg.contains("Could not load data; make sure it is valid!"));
        assert!(svg.contains("bad &lt;json&gt;"));

        let repeats = Timeline::from(
            TimelineLabel::new("Repeats"),
            [timeline().events(), timeline().events()].concat(),
        );
        let render = render_timeline(&repeats, &CategoryColours::new(), zoom!(30), &config);
        let svg = timeline_svg(&render, &config);
        assert!(svg.contains("Event ID `1` is used more than once in the timeline"));
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn draws_timelines_side_by_side() {
        let config = RenderConfig::default();
        let document = InputDocument::from(Vec::new(), vec![timeline(), timeline()]);
        let svg = document_svg(&render_document(&document, zoom!(30), &config), &config);
        assert_eq!(svg.matches("<g class=\"timeline\"").count(), 2);

        // Each is 76 wide (gutter plus one lane), with a 96 gap between
        assert!(svg.contains("width=\"248\""));
        // The second timeline's lane heading is centred in its lane
        assert!(svg.contains("<text x=\"228\""));
    }
}
