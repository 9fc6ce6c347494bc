//! Which third of the bar a point falls in.

use crate::screen::ScreenMetrics;
use bar_config::Position;
use bar_core::{Point, Rect, ScreenDescriptor, Section};

/// Classify `point` into a bar section.
///
/// Vertical bars split the screen height into three bands starting at
/// `metrics.y`.  Horizontal bars split the width into three bands starting
/// at 0, so `point.x` must already be relative to the screen's left edge.
/// Each band includes its lower boundary.
#[must_use]
pub fn classify(point: Point, position: Position, metrics: &ScreenMetrics) -> Section {
    if position.is_vertical() {
        let third = metrics.height / 3.0;
        pick(point.y, metrics.y, third, [Section::Top, Section::Middle, Section::Bottom])
    } else {
        let third = metrics.width / 3.0;
        pick(point.x, 0.0, third, [Section::Left, Section::Center, Section::Right])
    }
}

/// Section of a widget given its mapped screen bounds.
///
/// Host-side helper for section-aware behaviour outside popup placement.
/// Bands are measured from origin 0 on both axes using the raw screen size.
/// Returns `None` when the host has no screen for the widget.
#[must_use]
pub fn widget_section(
    bounds: &Rect,
    position: Position,
    screen: Option<&ScreenDescriptor>,
) -> Option<Section> {
    let screen = screen?;
    let center = bounds.center();

    let section = if position.is_vertical() {
        pick(
            center.y,
            0.0,
            screen.height / 3.0,
            [Section::Top, Section::Middle, Section::Bottom],
        )
    } else {
        pick(
            center.x,
            0.0,
            screen.width / 3.0,
            [Section::Left, Section::Center, Section::Right],
        )
    };
    Some(section)
}

fn pick(value: f64, origin: f64, third: f64, bands: [Section; 3]) -> Section {
    if value < origin + third {
        bands[0]
    } else if value < origin + third * 2.0 {
        bands[1]
    } else {
        bands[2]
    }
}
