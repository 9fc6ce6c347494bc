//! Screen, bar and popup geometry for the status-bar shell.
//!
//! Every function here is pure: inputs come in as arguments (never from a
//! settings singleton) and a fresh result comes out.
//!
//! - [`screen`]: host screen normalization, safe margins, adaptive scale
//! - [`bar`]: the bar's footprint on its screen edge
//! - [`section`]: which third of the bar a point falls in
//! - [`popup`]: where an anchored popup is drawn
//! - [`trigger`]: wiring a bar-widget click to the popup state

pub mod bar;
pub mod popup;
pub mod screen;
pub mod section;
pub mod trigger;

pub use bar::{bar_bounds, bar_dimensions, BarDimensions, BarGeometry};
pub use popup::{place, PlacementResult, PopupRequest};
pub use screen::{adaptive_scale, safe_margins, SafeMargins, ScreenMetrics};
pub use section::{classify, widget_section};
pub use trigger::{current_placement, placement_request, trigger_popup};
