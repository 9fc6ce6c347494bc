use bar_core::{Rect, ScreenDescriptor};
use serde::{Deserialize, Serialize};

/// Fallback screen used when the host reports none.
pub const FALLBACK_WIDTH: f64 = 1920.0;
pub const FALLBACK_HEIGHT: f64 = 1080.0;

/// Screen width at which popups render at their nominal size.
pub const REFERENCE_WIDTH: f64 = 2560.0;

/// Popup clearance from every screen edge, before pixel-ratio scaling.
pub const BASE_MARGIN: f64 = 8.0;

/// Normalized screen geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub x:      f64,
    pub y:      f64,
    pub width:  f64,
    pub height: f64,
    /// Device pixel ratio.
    pub scale:  f64,
    /// `false` when these are the fallback metrics rather than a real screen.
    pub is_valid: bool,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            x:        0.0,
            y:        0.0,
            width:    FALLBACK_WIDTH,
            height:   FALLBACK_HEIGHT,
            scale:    1.0,
            is_valid: false,
        }
    }
}

impl ScreenMetrics {
    /// Normalize a host screen descriptor.
    ///
    /// Never fails: an absent screen yields [`ScreenMetrics::default`], and
    /// non-positive or non-finite sizes of a present one are replaced
    /// individually.
    pub fn from_descriptor(screen: Option<&ScreenDescriptor>) -> Self {
        let Some(screen) = screen else {
            tracing::warn!("No screen provided, using {FALLBACK_WIDTH}x{FALLBACK_HEIGHT} defaults");
            return Self::default();
        };

        Self {
            x:        finite_or(screen.x, 0.0),
            y:        finite_or(screen.y, 0.0),
            width:    positive_or(screen.width, FALLBACK_WIDTH),
            height:   positive_or(screen.height, FALLBACK_HEIGHT),
            scale:    positive_or(screen.device_pixel_ratio, 1.0),
            is_valid: true,
        }
    }

    /// The screen rectangle shrunk by the safe margins on every side.
    #[must_use]
    pub fn safe_rect(&self) -> Rect {
        let m = safe_margins(self);
        Rect::new(
            self.x + m.left,
            self.y + m.top,
            self.width - m.left - m.right,
            self.height - m.top - m.bottom,
        )
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

/// Minimum clearance kept between a popup and each screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeMargins {
    pub top:    f64,
    pub bottom: f64,
    pub left:   f64,
    pub right:  f64,
}

/// Uniform margins of [`BASE_MARGIN`] scaled by the device pixel ratio.
#[must_use]
pub fn safe_margins(metrics: &ScreenMetrics) -> SafeMargins {
    let m = BASE_MARGIN * metrics.scale;
    SafeMargins { top: m, bottom: m, left: m, right: m }
}

/// Screen-width-driven popup multiplier.
///
/// Screens up to [`REFERENCE_WIDTH`] wide get `1.0`; wider screens scale up
/// proportionally.  `user_scale` is applied on top.
#[must_use]
pub fn adaptive_scale(screen_width: f64, user_scale: f64) -> f64 {
    (screen_width / REFERENCE_WIDTH).max(1.0) * user_scale
}
