use crate::{
    popup::{place, PlacementResult, PopupRequest},
    section::widget_section,
};
use bar_config::{BarConfig, PopupConfig};
use bar_core::{ControlCenterState, Message, Rect, ScreenDescriptor, TriggerPosition};
use tracing::{debug, warn};

/// Handle a click on a bar widget that owns the control-center popup.
///
/// Records where the widget sits (and which bar section it is in) on the
/// popup state, then toggles the popup.  Returns the recorded trigger.
pub fn trigger_popup(
    state: &mut ControlCenterState,
    widget_bounds: Rect,
    bar: &BarConfig,
    screen: Option<ScreenDescriptor>,
) -> TriggerPosition {
    if screen.is_none() {
        warn!("Popup triggered without a screen; section left unset");
    }

    let trigger = TriggerPosition {
        bounds:  widget_bounds,
        section: widget_section(&widget_bounds, bar.position, screen.as_ref()),
        screen,
    };
    debug!(
        bounds = ?trigger.bounds,
        section = ?trigger.section,
        bar = %bar.position,
        thickness = bar.thickness,
        "Triggering popup"
    );

    state.update(Message::TriggerMoved(trigger));
    state.update(Message::Toggle);
    trigger
}

/// The placement request for the popup's current trigger.
///
/// Without a recorded trigger the placer's default trigger bounds apply.
#[must_use]
pub fn placement_request(
    state: &ControlCenterState,
    bar: &BarConfig,
    popup: &PopupConfig,
) -> PopupRequest {
    let trigger = state.trigger.as_ref();
    PopupRequest::from_config(
        trigger.and_then(|t| t.screen),
        bar,
        popup,
        trigger.map(|t| t.bounds),
    )
}

/// Placement for the popup's current state, or `None` while it is hidden.
#[must_use]
pub fn current_placement(
    state: &ControlCenterState,
    bar: &BarConfig,
    popup: &PopupConfig,
) -> Option<PlacementResult> {
    state
        .visible
        .then(|| place(&placement_request(state, bar, popup)))
}
