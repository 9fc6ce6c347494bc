use crate::state::TriggerPosition;

/// Messages that drive [`ControlCenterState`](crate::state::ControlCenterState).
///
/// Sources:
/// - Bar widget click     → `TriggerMoved` followed by `Toggle`
/// - Section header click → `OpenWithSection`, `ToggleSection`
/// - Widget tile click    → `ExpandWidget`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ── Visibility ────────────────────────────────────────────────────────────
    /// Open when closed, close when open.
    Toggle,
    Open,
    Close,
    /// Close if visible; otherwise open with `section` expanded.
    OpenWithSection(String),

    // ── Expansion ─────────────────────────────────────────────────────────────
    /// Collapse `section` if it is the expanded one, otherwise expand it.
    ToggleSection(String),
    /// Expand the widget with this id at this position in the widget list.
    ExpandWidget { id: String, index: usize },

    // ── Anchoring ─────────────────────────────────────────────────────────────
    /// The widget that opens the popup was (re)located on screen.
    TriggerMoved(TriggerPosition),
}
