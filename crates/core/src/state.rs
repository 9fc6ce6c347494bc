use crate::{
    event::Message,
    geometry::{Rect, ScreenDescriptor, Section},
};
use serde::{Deserialize, Serialize};

/// Where the widget that opened the popup sits, captured at click time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerPosition {
    /// Screen-space bounds of the trigger widget.
    pub bounds: Rect,
    /// Bar section the trigger falls in; `None` when the screen was unknown.
    pub section: Option<Section>,
    /// Screen the trigger lives on, if the host reported one.
    pub screen: Option<ScreenDescriptor>,
}

/// UI state of the control-center popup.
///
/// Holds no geometry of its own: placement and row packing are recomputed
/// from this state plus the explicit bar/screen inputs on every pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlCenterState {
    pub visible: bool,
    /// Id of the widget whose detail view is expanded (e.g. `"wifi"`).
    pub expanded_section: Option<String>,
    /// List position of the expanded widget.
    pub expanded_widget_index: Option<usize>,
    /// Last reported trigger location.
    pub trigger: Option<TriggerPosition>,
}

impl ControlCenterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle => self.visible = !self.visible,
            Message::Open => self.visible = true,
            Message::Close => self.visible = false,
            Message::OpenWithSection(section) => {
                if self.visible {
                    self.visible = false;
                } else {
                    self.expanded_section = Some(section);
                    self.visible = true;
                }
            }
            Message::ToggleSection(section) => {
                if self.expanded_section.as_deref() == Some(section.as_str()) {
                    self.expanded_section = None;
                    self.expanded_widget_index = None;
                } else {
                    self.expanded_section = Some(section);
                }
            }
            Message::ExpandWidget { id, index } => {
                self.expanded_section = Some(id);
                self.expanded_widget_index = Some(index);
            }
            Message::TriggerMoved(trigger) => self.trigger = Some(trigger),
        }
    }

    /// The `(widget id, list index)` selector for row packing, when both
    /// halves are set.
    #[must_use]
    pub fn expanded(&self) -> Option<(&str, usize)> {
        Some((self.expanded_section.as_deref()?, self.expanded_widget_index?))
    }
}
