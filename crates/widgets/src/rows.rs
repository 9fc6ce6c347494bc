//! Packing the control-center widget list into rows.

use bar_core::WidgetDescriptor;
use serde::Serialize;
use tracing::{debug, trace};

/// Visual padding factor applied to every item width before it is compared
/// against the container.  Changing it changes existing layouts.
pub const ITEM_PADDING_FACTOR: f64 = 0.95;

pub type Row = Vec<WidgetDescriptor>;

/// Result of one packing pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLayout {
    pub rows: Vec<Row>,
    /// Row holding the expanded widget, if it was found.
    pub expanded_row_index: Option<usize>,
}

/// Packs widget lists into a container of fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPacker {
    pub container_width: f64,
    /// Gap between neighbouring items in a row.
    pub spacing: f64,
}

impl RowPacker {
    pub fn new(container_width: f64, spacing: f64) -> Self {
        Self { container_width, spacing }
    }

    /// Padded pixel width `widget` occupies in this container.
    #[must_use]
    pub fn item_width(&self, widget: &WidgetDescriptor) -> f64 {
        widget
            .width_class()
            .pixel_width(self.container_width, self.spacing)
            * ITEM_PADDING_FACTOR
    }

    /// Pack `widgets` into rows in one left-to-right pass.
    ///
    /// Full-row kinds flush the pending row and take a row of their own.
    /// Any other widget starts a new row when it would push the current one
    /// past the container width.  `expanded` is a `(widget id, list index)`
    /// selector; it only determines `expanded_row_index` and never changes
    /// the packing.
    pub fn pack(&self, widgets: &[WidgetDescriptor], expanded: Option<(&str, usize)>) -> RowLayout {
        let base = self.container_width;
        let mut rows: Vec<Row> = Vec::new();
        let mut current: Row = Vec::new();
        let mut current_width = 0.0;
        let mut expanded_row_index = None;

        for (index, widget) in widgets.iter().enumerate() {
            let item_width = self.item_width(widget);

            let row_index = if widget.is_full_row() {
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                rows.push(vec![widget.clone()]);
                current_width = 0.0;
                rows.len() - 1
            } else if !current.is_empty() && current_width + self.spacing + item_width > base {
                trace!(row = rows.len(), width = current_width, "Row full at '{}'", widget.id);
                rows.push(std::mem::replace(&mut current, vec![widget.clone()]));
                current_width = item_width;
                rows.len()
            } else {
                if !current.is_empty() {
                    current_width += self.spacing;
                }
                current_width += item_width;
                current.push(widget.clone());
                rows.len()
            };

            if expanded == Some((widget.id.as_str(), index)) {
                expanded_row_index = Some(row_index);
            }
        }

        if !current.is_empty() {
            rows.push(current);
        }

        debug!(
            widgets = widgets.len(),
            rows = rows.len(),
            container_width = base,
            ?expanded_row_index,
            "Packed control-center rows"
        );

        RowLayout { rows, expanded_row_index }
    }

    /// Total width a row occupies: padded item widths plus the gaps between
    /// them.
    #[must_use]
    pub fn row_width(&self, row: &[WidgetDescriptor]) -> f64 {
        let items: f64 = row.iter().map(|w| self.item_width(w)).sum();
        items + self.spacing * row.len().saturating_sub(1) as f64
    }
}

/// One-shot form of [`RowPacker::pack`].
pub fn pack_rows(
    widgets: &[WidgetDescriptor],
    container_width: f64,
    spacing: f64,
    expanded: Option<(&str, usize)>,
) -> RowLayout {
    RowPacker::new(container_width, spacing).pack(widgets, expanded)
}
