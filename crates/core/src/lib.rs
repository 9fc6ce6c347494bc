pub mod error;
pub mod event;
pub mod geometry;
pub mod state;
pub mod widget;

pub use error::{BarError, Result};
pub use event::Message;
pub use geometry::{Point, Rect, ScreenDescriptor, Section, Size};
pub use state::{ControlCenterState, TriggerPosition};
pub use widget::{WidgetDescriptor, WidthClass};
