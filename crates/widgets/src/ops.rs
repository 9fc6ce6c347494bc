//! Copy-on-write transforms over the control-center widget list.
//!
//! Each transform takes the current list by reference and returns the new
//! list, or `None` when the call is a no-op (out-of-range index, nothing to
//! change).  Callers only write back `Some` results.

use bar_core::{
    widget::{is_full_row_id, HALF_OR_FULL_IDS},
    WidgetDescriptor,
};

/// Append a new enabled widget.  Full-row kinds get width 100, others 50.
#[must_use]
pub fn add(widgets: &[WidgetDescriptor], id: &str) -> Vec<WidgetDescriptor> {
    let width = if is_full_row_id(id) { 100 } else { 50 };
    let mut next = widgets.to_vec();
    next.push(WidgetDescriptor::new(id, width));
    next
}

#[must_use]
pub fn remove(widgets: &[WidgetDescriptor], index: usize) -> Option<Vec<WidgetDescriptor>> {
    if index >= widgets.len() {
        return None;
    }
    let mut next = widgets.to_vec();
    next.remove(index);
    Some(next)
}

/// Step the widget at `index` to its next size.
///
/// Full-row kinds stay at 100.  Network/audio tiles alternate half and full.
/// Everything else cycles quarter → half → full → quarter.
#[must_use]
pub fn toggle_size(widgets: &[WidgetDescriptor], index: usize) -> Option<Vec<WidgetDescriptor>> {
    let current = widgets.get(index)?;
    let width = current.effective_width();

    let next_width = if current.is_full_row() {
        100
    } else if HALF_OR_FULL_IDS.contains(&current.id.as_str()) {
        if width <= 50 { 100 } else { 50 }
    } else if width <= 25 {
        50
    } else if width <= 50 {
        100
    } else {
        25
    };

    let mut next = widgets.to_vec();
    next[index].width = next_width;
    Some(next)
}

/// Move the widget at `from` so it ends up at `to`.
#[must_use]
pub fn move_widget(
    widgets: &[WidgetDescriptor],
    from: usize,
    to: usize,
) -> Option<Vec<WidgetDescriptor>> {
    if from >= widgets.len() || to >= widgets.len() {
        return None;
    }
    let mut next = widgets.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// Flip the `enabled` flag of the widget at `index`.
#[must_use]
pub fn toggle_enabled(widgets: &[WidgetDescriptor], index: usize) -> Option<Vec<WidgetDescriptor>> {
    widgets.get(index)?;
    let mut next = widgets.to_vec();
    next[index].enabled = !next[index].enabled;
    Some(next)
}

/// Force every full-row kind to width 100.  `None` if all already are.
#[must_use]
pub fn ensure_full_row_width(widgets: &[WidgetDescriptor]) -> Option<Vec<WidgetDescriptor>> {
    if widgets.iter().all(|w| !w.is_full_row() || w.width == 100) {
        return None;
    }
    Some(
        widgets
            .iter()
            .cloned()
            .map(|mut w| {
                if w.is_full_row() {
                    w.width = 100;
                }
                w
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list() -> Vec<WidgetDescriptor> {
        vec![
            WidgetDescriptor::new("wifi", 50),
            WidgetDescriptor::new("performance", 25),
            WidgetDescriptor::new("volumeMixer", 50),
        ]
    }

    fn widths(widgets: &[WidgetDescriptor]) -> Vec<u8> {
        widgets.iter().map(|w| w.width).collect()
    }

    #[test]
    fn add_picks_default_width_by_kind() {
        let next = add(&list(), "media");
        assert_eq!(next.last(), Some(&WidgetDescriptor::new("media", 100)));
        let next = add(&next, "darkMode");
        assert_eq!(next.last(), Some(&WidgetDescriptor::new("darkMode", 50)));
        assert_eq!(next.len(), 5);
    }

    #[test]
    fn out_of_range_indices_are_no_ops() {
        let widgets = list();
        assert_eq!(remove(&widgets, 3), None);
        assert_eq!(toggle_size(&widgets, 3), None);
        assert_eq!(toggle_enabled(&widgets, 9), None);
        assert_eq!(move_widget(&widgets, 0, 3), None);
        assert_eq!(move_widget(&widgets, 3, 0), None);
    }

    #[test]
    fn transforms_leave_input_untouched() {
        let widgets = list();
        let _ = remove(&widgets, 0);
        let _ = toggle_size(&widgets, 1);
        assert_eq!(widgets, list());
    }

    #[test]
    fn toggle_size_cycles_by_kind() {
        let widgets = list();
        let next = toggle_size(&widgets, 0).unwrap();
        assert_eq!(widths(&next), vec![100, 25, 50]);
        let next = toggle_size(&next, 0).unwrap();
        assert_eq!(next[0].width, 50);

        let next = toggle_size(&widgets, 1).unwrap();
        assert_eq!(next[1].width, 50);
        let next = toggle_size(&next, 1).unwrap();
        assert_eq!(next[1].width, 100);
        let next = toggle_size(&next, 1).unwrap();
        assert_eq!(next[1].width, 25);

        let next = toggle_size(&widgets, 2).unwrap();
        assert_eq!(next[2].width, 100);
    }

    #[test]
    fn move_widget_reinserts_at_target() {
        let next = move_widget(&list(), 0, 2).unwrap();
        let ids: Vec<_> = next.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["performance", "volumeMixer", "wifi"]);
    }

    #[test]
    fn ensure_full_row_width_only_reports_changes() {
        let fixed = ensure_full_row_width(&list()).unwrap();
        assert_eq!(widths(&fixed), vec![50, 25, 100]);
        assert_eq!(ensure_full_row_width(&fixed), None);
    }

    #[test]
    fn toggle_enabled_flips_flag() {
        let next = toggle_enabled(&list(), 1).unwrap();
        assert!(!next[1].enabled);
        assert!(next[0].enabled);
    }
}
