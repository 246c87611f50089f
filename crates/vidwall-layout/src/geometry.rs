//! Geometry primitives shared by the strategies.
//!
//! The tolerances below absorb floating-point error that builds up across
//! repeated scale and translate passes. They are not geometric equality.

use serde::{Deserialize, Serialize};
use vidwall_common::types::Size;

use crate::layout::{sanitize_ratio, Cell};

/// Slack allowed when comparing a span against the width it must hold.
pub const FIT_EPSILON: f64 = 1e-6;

/// Slack for containment checks on emitted cells.
pub const CONTAINMENT_EPSILON: f64 = 0.5;

/// Smallest extent worth laying anything out in.
pub const MIN_EXTENT: f64 = 1e-3;

/// Largest box with `aspect_ratio` that fits inside `bounds` (scale to fit,
/// never crop).
pub fn fit_to_box(bounds: Size, aspect_ratio: f64) -> Size {
    if !bounds.is_drawable() {
        return Size::new(0.0, 0.0);
    }
    let ratio = sanitize_ratio(aspect_ratio);
    let height_at_full_width = bounds.width / ratio;
    if height_at_full_width <= bounds.height {
        Size::new(bounds.width, height_at_full_width)
    } else {
        Size::new(bounds.height * ratio, bounds.height)
    }
}

/// Axis-aligned bounding box of a set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bounding box enclosing every cell; zero-area at the origin when empty.
pub fn bounds_of(cells: &[Cell]) -> Bounds {
    let Some(first) = cells.first() else {
        return Bounds::default();
    };
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x + first.width, first.y + first.height);
    for cell in &cells[1..] {
        min_x = min_x.min(cell.x);
        min_y = min_y.min(cell.y);
        max_x = max_x.max(cell.x + cell.width);
        max_y = max_y.max(cell.y + cell.height);
    }
    Bounds {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Scale every cell about the origin.
pub(crate) fn scale_cells(cells: &mut [Cell], factor: f64) {
    for cell in cells {
        cell.x *= factor;
        cell.y *= factor;
        cell.width *= factor;
        cell.height *= factor;
    }
}

pub(crate) fn translate_cells(cells: &mut [Cell], dx: f64, dy: f64) {
    for cell in cells {
        cell.x += dx;
        cell.y += dy;
    }
}

/// Centered offset of an extent of `length` inside `available`.
pub(crate) fn center_offset(available: f64, length: f64) -> f64 {
    ((available - length) / 2.0).max(0.0)
}

/// True when every cell lies inside the container, up to [`CONTAINMENT_EPSILON`].
pub fn contained_in(cells: &[Cell], container: Size) -> bool {
    cells.iter().all(|c| {
        c.x >= -CONTAINMENT_EPSILON
            && c.y >= -CONTAINMENT_EPSILON
            && c.x + c.width <= container.width + CONTAINMENT_EPSILON
            && c.y + c.height <= container.height + CONTAINMENT_EPSILON
    })
}
