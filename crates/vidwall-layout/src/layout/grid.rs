//! Uniform grids: the standard (non-tetris) mode and the placement step
//! shared with the balanced-grid strategy.

use vidwall_common::types::Size;

use super::{Cell, LayoutItem, LayoutResult};
use crate::geometry::{center_offset, fit_to_box};

/// Place items row-major into a `rows` x `cols` grid of equal cells.
///
/// Each item is fitted into its cell and centered there; a partial last row
/// is centered horizontally as a block.
pub(crate) fn place_in_grid(
    container: Size,
    items: &[LayoutItem],
    rows: usize,
    cols: usize,
) -> Vec<Cell> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    let cell_w = container.width / cols as f64;
    let cell_h = container.height / rows as f64;
    let slot = Size::new(cell_w, cell_h);

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let row = i / cols;
            let col = i % cols;
            let in_row = (items.len() - row * cols).min(cols);
            let row_offset = (cols - in_row) as f64 * cell_w / 2.0;

            let fitted = fit_to_box(slot, item.ratio());
            Cell {
                stream_id: item.id.clone(),
                x: row_offset + col as f64 * cell_w + center_offset(cell_w, fitted.width),
                y: row as f64 * cell_h + center_offset(cell_h, fitted.height),
                width: fitted.width,
                height: fitted.height,
            }
        })
        .collect()
}

/// Shape of the standard grid for `count` items: as square as possible,
/// columns first.
pub fn standard_grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (rows, cols)
}

/// Straight uniform grid, no strategy comparison.
pub fn calculate_standard_layout(container: Size, items: &[LayoutItem]) -> LayoutResult {
    if items.is_empty() || !container.is_drawable() {
        return LayoutResult::empty();
    }
    let (rows, cols) = standard_grid_shape(items.len());
    let cells = place_in_grid(container, items, rows, cols);
    LayoutResult::from_cells(cells, container).with_grid(rows, cols)
}
