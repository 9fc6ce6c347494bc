use crate::screen::ScreenMetrics;
use bar_config::{BarConfig, Position};
use bar_core::Rect;
use serde::{Deserialize, Serialize};

/// Bar measurements after pixel-ratio scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarDimensions {
    pub thickness:  f64,
    pub spacing:    f64,
    pub bottom_gap: f64,
    /// Footprint along the short axis: thickness + spacing, plus the bottom
    /// gap for bottom bars.
    pub total_size: f64,
}

/// Scale the bar inputs by the screen's pixel ratio.
#[must_use]
pub fn bar_dimensions(
    position: Position,
    thickness: f64,
    spacing: f64,
    bottom_gap: f64,
    metrics: &ScreenMetrics,
) -> BarDimensions {
    let thickness = thickness * metrics.scale;
    let spacing = spacing * metrics.scale;
    let bottom_gap = bottom_gap * metrics.scale;

    let mut total_size = thickness + spacing;
    if position == Position::Bottom {
        total_size += bottom_gap;
    }

    BarDimensions { thickness, spacing, bottom_gap, total_size }
}

/// The bar's footprint, flush with the screen edge it is attached to.
#[must_use]
pub fn bar_bounds(position: Position, dimensions: &BarDimensions, metrics: &ScreenMetrics) -> Rect {
    let size = dimensions.total_size;
    match position {
        Position::Top => Rect::new(metrics.x, metrics.y, metrics.width, size),
        Position::Bottom => Rect::new(
            metrics.x,
            metrics.y + metrics.height - size,
            metrics.width,
            size,
        ),
        Position::Left => Rect::new(metrics.x, metrics.y, size, metrics.height),
        Position::Right => Rect::new(
            metrics.x + metrics.width - size,
            metrics.y,
            size,
            metrics.height,
        ),
    }
}

/// Shorthands over a whole [`BarConfig`].
pub trait BarGeometry {
    fn dimensions(&self, metrics: &ScreenMetrics) -> BarDimensions;
    fn bounds(&self, metrics: &ScreenMetrics) -> Rect;
}

impl BarGeometry for BarConfig {
    fn dimensions(&self, metrics: &ScreenMetrics) -> BarDimensions {
        bar_dimensions(self.position, self.thickness, self.spacing, self.bottom_gap, metrics)
    }

    fn bounds(&self, metrics: &ScreenMetrics) -> Rect {
        bar_bounds(self.position, &self.dimensions(metrics), metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bar_core::ScreenDescriptor;
    use pretty_assertions::assert_eq;

    fn metrics(x: f64, y: f64, w: f64, h: f64, scale: f64) -> ScreenMetrics {
        ScreenMetrics::from_descriptor(Some(&ScreenDescriptor::new(x, y, w, h, scale)))
    }

    #[test]
    fn bottom_gap_only_counts_for_bottom_bars() {
        let m = metrics(0.0, 0.0, 1920.0, 1080.0, 1.0);
        assert_eq!(bar_dimensions(Position::Bottom, 48.0, 4.0, 10.0, &m).total_size, 62.0);
        assert_eq!(bar_dimensions(Position::Top, 48.0, 4.0, 10.0, &m).total_size, 52.0);
        assert_eq!(bar_dimensions(Position::Left, 48.0, 4.0, 10.0, &m).total_size, 52.0);
    }

    #[test]
    fn dimensions_scale_with_pixel_ratio() {
        let m = metrics(0.0, 0.0, 3840.0, 2160.0, 2.0);
        let d = bar_dimensions(Position::Bottom, 48.0, 4.0, 2.0, &m);
        assert_eq!(d, BarDimensions { thickness: 96.0, spacing: 8.0, bottom_gap: 4.0, total_size: 108.0 });
    }

    #[test]
    fn bounds_touch_their_edge() {
        let m = metrics(100.0, 50.0, 1000.0, 800.0, 1.0);
        let d = bar_dimensions(Position::Top, 40.0, 0.0, 0.0, &m);

        assert_eq!(bar_bounds(Position::Top, &d, &m), Rect::new(100.0, 50.0, 1000.0, 40.0));
        assert_eq!(bar_bounds(Position::Bottom, &d, &m), Rect::new(100.0, 810.0, 1000.0, 40.0));
        assert_eq!(bar_bounds(Position::Left, &d, &m), Rect::new(100.0, 50.0, 40.0, 800.0));
        assert_eq!(bar_bounds(Position::Right, &d, &m), Rect::new(1060.0, 50.0, 40.0, 800.0));
    }

    #[test]
    fn config_shorthand_matches_free_functions() {
        let m = metrics(0.0, 0.0, 1920.0, 1080.0, 1.0);
        let bar = BarConfig::default();
        assert_eq!(bar.bounds(&m), Rect::new(0.0, 1028.0, 1920.0, 52.0));
    }
}
