//! Popup placement anchored to a bar widget.
//!
//! [`place`] is a pure function of its [`PopupRequest`]: it resolves screen
//! metrics, the bar footprint and the trigger's section, then puts the popup
//! next to the bar, centered on the trigger along the bar's long axis and
//! clamped inside the screen's safe margins.

use crate::{
    bar::BarGeometry,
    screen::{adaptive_scale, safe_margins, SafeMargins, ScreenMetrics},
    section::classify,
};
use bar_config::{BarConfig, PopupConfig, Position};
use bar_core::{Point, Rect, ScreenDescriptor, Section, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_TRIGGER: Rect = Rect::new(0.0, 0.0, 80.0, 48.0);
pub const DEFAULT_POPUP_SIZE: Size = Size::new(470.0, 600.0);
pub const DEFAULT_GAP: f64 = 8.0;
pub const DEFAULT_USER_SCALE: f64 = 1.0;

/// Everything the placer needs.  Optional fields fall back to the
/// `DEFAULT_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PopupRequest {
    /// Screen the trigger lives on.
    pub screen: Option<ScreenDescriptor>,
    pub bar: BarConfig,
    /// Screen-space bounds of the widget that opened the popup.
    pub trigger: Option<Rect>,
    /// Popup size before adaptive scaling.
    pub popup_size: Option<Size>,
    /// Bar-to-popup distance before pixel-ratio scaling.
    pub gap: Option<f64>,
    pub user_scale: Option<f64>,
}

impl PopupRequest {
    /// Build a request from configured bar and popup settings.
    pub fn from_config(
        screen: Option<ScreenDescriptor>,
        bar: &BarConfig,
        popup: &PopupConfig,
        trigger: Option<Rect>,
    ) -> Self {
        Self {
            screen,
            bar: *bar,
            trigger,
            popup_size: Some(Size::new(popup.width, popup.height)),
            gap: Some(popup.gap),
            user_scale: Some(popup.user_scale),
        }
    }
}

/// Final popup geometry plus the intermediate values it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub x: f64,
    pub y: f64,
    /// Scaled popup width.
    pub width: f64,
    /// Scaled popup height.
    pub height: f64,
    /// Adaptive scale applied to the popup size.
    pub scale: f64,
    pub section: Section,
    pub bar_bounds: Rect,
    pub screen_metrics: ScreenMetrics,
}

impl PlacementResult {
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Values shared by the horizontal and vertical layouts.
struct Frame<'a> {
    metrics: &'a ScreenMetrics,
    margins: SafeMargins,
    bar_bounds: Rect,
    trigger: Rect,
    width: f64,
    height: f64,
    gap: f64,
}

impl Frame<'_> {
    fn min_x(&self) -> f64 {
        self.metrics.x + self.margins.left
    }

    fn max_x(&self) -> f64 {
        self.metrics.x + self.metrics.width - self.width - self.margins.right
    }

    fn min_y(&self) -> f64 {
        self.metrics.y + self.margins.top
    }

    fn max_y(&self) -> f64 {
        self.metrics.y + self.metrics.height - self.height - self.margins.bottom
    }
}

/// Compute where the popup goes.
#[must_use]
pub fn place(request: &PopupRequest) -> PlacementResult {
    let metrics = ScreenMetrics::from_descriptor(request.screen.as_ref());
    let bar = &request.bar;

    let scale = adaptive_scale(metrics.width, request.user_scale.unwrap_or(DEFAULT_USER_SCALE));
    let size = request.popup_size.unwrap_or(DEFAULT_POPUP_SIZE);
    let width = size.width * scale;
    let height = size.height * scale;
    let gap = request.gap.unwrap_or(DEFAULT_GAP) * metrics.scale;

    let mut trigger = request.trigger.unwrap_or(DEFAULT_TRIGGER);
    if trigger.height == 0.0 {
        trigger.height = bar.thickness;
    }

    let bar_bounds = bar.bounds(&metrics);
    let center = Point::new(
        trigger.x - metrics.x + trigger.width / 2.0,
        trigger.y + trigger.height / 2.0,
    );
    let section = classify(center, bar.position, &metrics);

    let frame = Frame {
        metrics: &metrics,
        margins: safe_margins(&metrics),
        bar_bounds,
        trigger,
        width,
        height,
        gap,
    };
    let (x, y) = match bar.position {
        Position::Top | Position::Bottom => horizontal(bar.position, &frame),
        Position::Left | Position::Right => vertical(bar.position, &frame),
    };

    debug!(
        screen_x = metrics.x,
        screen_y = metrics.y,
        screen_width = metrics.width,
        screen_height = metrics.height,
        bar = %bar.position,
        bar_bounds = ?bar_bounds,
        trigger = ?trigger,
        %section,
        width,
        height,
        scale,
        "Popup placed at ({x:.1}, {y:.1})"
    );

    PlacementResult {
        x,
        y,
        width,
        height,
        scale,
        section,
        bar_bounds,
        screen_metrics: metrics,
    }
}

/// Top/bottom bar: center on the trigger horizontally, sit above or below
/// the bar.
fn horizontal(position: Position, f: &Frame<'_>) -> (f64, f64) {
    let center_x = f.trigger.x - f.metrics.x + f.trigger.width / 2.0;
    let x = (center_x - f.width / 2.0).min(f.max_x()).max(f.min_x());

    let y = if position == Position::Top {
        let below = f.bar_bounds.bottom() + f.gap;
        below.max(f.min_y()).min(f.max_y())
    } else {
        let above = f.bar_bounds.y - f.height - f.gap;
        above.min(f.max_y()).max(f.min_y())
    };

    (x, y)
}

/// Left/right bar: center on the trigger vertically, sit beside the bar.
fn vertical(position: Position, f: &Frame<'_>) -> (f64, f64) {
    let center_y = f.trigger.y - f.metrics.y + f.trigger.height / 2.0;
    let y = (center_y - f.height / 2.0).min(f.max_y()).max(f.min_y());

    let x = if position == Position::Left {
        let beside = f.bar_bounds.right() + f.gap;
        beside.max(f.min_x()).min(f.max_x())
    } else {
        let beside = f.bar_bounds.x - f.width - f.gap;
        beside.min(f.max_x()).max(f.min_x())
    };

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn screen(w: f64, h: f64) -> Option<ScreenDescriptor> {
        Some(ScreenDescriptor::new(0.0, 0.0, w, h, 1.0))
    }

    fn bar(position: Position) -> BarConfig {
        BarConfig { position, thickness: 48.0, spacing: 4.0, bottom_gap: 0.0 }
    }

    #[test]
    fn bottom_bar_centers_above_trigger() {
        let result = place(&PopupRequest {
            screen: screen(1920.0, 1080.0),
            bar: bar(Position::Bottom),
            trigger: Some(Rect::new(900.0, 1032.0, 80.0, 48.0)),
            popup_size: Some(Size::new(470.0, 600.0)),
            gap: Some(8.0),
            user_scale: Some(1.0),
        });

        // Bar footprint is thickness + spacing = 52.
        assert_eq!(result.bar_bounds, Rect::new(0.0, 1028.0, 1920.0, 52.0));
        assert_eq!(result.x, 900.0 + 40.0 - 235.0);
        assert_eq!(result.y, 1080.0 - 52.0 - 600.0 - 8.0);
        assert_eq!((result.width, result.height, result.scale), (470.0, 600.0, 1.0));
        assert_eq!(result.section, Section::Center);
        assert!(result.screen_metrics.is_valid);
    }

    #[test]
    fn top_bar_clamps_to_left_margin() {
        let result = place(&PopupRequest {
            screen: screen(1920.0, 1080.0),
            bar: bar(Position::Top),
            trigger: Some(Rect::new(100.0, 0.0, 80.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.x, 8.0);
        assert_eq!(result.y, 52.0 + 8.0);
        assert_eq!(result.section, Section::Left);
    }

    #[test]
    fn left_bar_places_to_the_right() {
        let result = place(&PopupRequest {
            screen: screen(1920.0, 1080.0),
            bar: bar(Position::Left),
            trigger: Some(Rect::new(0.0, 500.0, 48.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.x, 52.0 + 8.0);
        assert_eq!(result.y, 524.0 - 300.0);
        assert_eq!(result.section, Section::Middle);
    }

    #[test]
    fn right_bar_clamps_to_bottom_margin() {
        let result = place(&PopupRequest {
            screen: screen(1920.0, 1080.0),
            bar: bar(Position::Right),
            trigger: Some(Rect::new(1872.0, 1000.0, 48.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.x, 1920.0 - 52.0 - 470.0 - 8.0);
        assert_eq!(result.y, 1080.0 - 600.0 - 8.0);
        assert_eq!(result.section, Section::Bottom);
    }

    #[test]
    fn wide_screens_scale_the_popup() {
        let result = place(&PopupRequest {
            screen: screen(5120.0, 2880.0),
            bar: bar(Position::Top),
            trigger: Some(Rect::new(2520.0, 0.0, 80.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.scale, 2.0);
        assert_eq!((result.width, result.height), (940.0, 1200.0));
        assert_eq!(result.x, 2560.0 - 470.0);
    }

    #[test]
    fn pixel_ratio_scales_gap_and_margins_but_not_popup() {
        let result = place(&PopupRequest {
            screen: Some(ScreenDescriptor::new(0.0, 0.0, 1920.0, 1080.0, 2.0)),
            bar: bar(Position::Top),
            trigger: Some(Rect::new(0.0, 0.0, 80.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.scale, 1.0);
        assert_eq!(result.bar_bounds.height, 104.0);
        assert_eq!(result.y, 104.0 + 16.0);
        assert_eq!(result.x, 16.0);
    }

    #[test]
    fn empty_request_uses_documented_defaults() {
        let result = place(&PopupRequest::default());
        assert!(!result.screen_metrics.is_valid);
        assert_eq!(result.bar_bounds, Rect::new(0.0, 1028.0, 1920.0, 52.0));
        assert_eq!(result.x, 8.0);
        assert_eq!(result.y, 420.0);
        assert_eq!(result.section, Section::Left);
    }

    #[test]
    fn zero_height_trigger_uses_bar_thickness() {
        let mut request = PopupRequest {
            screen: screen(1920.0, 1080.0),
            bar: bar(Position::Left),
            trigger: Some(Rect::new(0.0, 500.0, 48.0, 0.0)),
            ..Default::default()
        };
        let zero = place(&request);
        request.trigger = Some(Rect::new(0.0, 500.0, 48.0, 48.0));
        assert_eq!(zero, place(&request));
    }

    #[test]
    fn trigger_x_is_screen_relative() {
        let result = place(&PopupRequest {
            screen: Some(ScreenDescriptor::new(100.0, 0.0, 1920.0, 1080.0, 1.0)),
            bar: bar(Position::Bottom),
            trigger: Some(Rect::new(600.0, 1032.0, 80.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.x, 500.0 + 40.0 - 235.0);
    }

    #[test]
    fn oversized_popup_pins_to_margin() {
        let result = place(&PopupRequest {
            screen: screen(400.0, 300.0),
            bar: bar(Position::Bottom),
            trigger: Some(Rect::new(200.0, 252.0, 80.0, 48.0)),
            ..Default::default()
        });
        assert_eq!(result.x, 8.0);
        assert_eq!(result.y, 8.0);
    }

    #[test]
    fn same_request_same_result() {
        let request = PopupRequest {
            screen: Some(ScreenDescriptor::new(37.5, 12.25, 3440.0, 1440.0, 1.25)),
            bar: BarConfig { position: Position::Right, thickness: 36.0, spacing: 6.0, bottom_gap: 3.0 },
            trigger: Some(Rect::new(3400.0, 700.0, 36.0, 36.0)),
            popup_size: Some(Size::new(333.3, 777.7)),
            gap: Some(5.5),
            user_scale: Some(1.1),
        };
        assert_eq!(place(&request), place(&request));
    }

    fn any_position() -> impl Strategy<Value = Position> {
        prop_oneof![
            Just(Position::Top),
            Just(Position::Bottom),
            Just(Position::Left),
            Just(Position::Right),
        ]
    }

    proptest! {
        #[test]
        fn fitting_popups_stay_inside_safe_area(
            (sx, sy) in (-4000.0..4000.0f64, -2000.0..2000.0f64),
            (sw, sh) in (800.0..6000.0f64, 600.0..3000.0f64),
            dpr in prop_oneof![Just(1.0f64), Just(1.25), Just(1.5), Just(2.0)],
            position in any_position(),
            (thickness, spacing, bottom_gap) in (0.0..120.0f64, 0.0..16.0f64, 0.0..32.0f64),
            (tx, ty) in (-500.0..7000.0f64, -500.0..4000.0f64),
            (pw, ph) in (50.0..600.0f64, 50.0..500.0f64),
            gap in 0.0..32.0f64,
        ) {
            let result = place(&PopupRequest {
                screen: Some(ScreenDescriptor::new(sx, sy, sw, sh, dpr)),
                bar: BarConfig { position, thickness, spacing, bottom_gap },
                trigger: Some(Rect::new(tx, ty, 40.0, 40.0)),
                popup_size: Some(Size::new(pw, ph)),
                gap: Some(gap),
                user_scale: Some(1.0),
            });
            let safe = result.screen_metrics.safe_rect();
            prop_assume!(result.width <= safe.width && result.height <= safe.height);

            let eps = 1e-6;
            let tolerant = Rect::new(safe.x - eps, safe.y - eps, safe.width + 2.0 * eps, safe.height + 2.0 * eps);
            prop_assert!(tolerant.contains_rect(&result.rect()), "{:?} outside {:?}", result.rect(), safe);
        }
    }
}
