//! Row-Pack and Column-Pack: greedy one-dimensional strip packing.
//!
//! Both run the same algorithm; Column-Pack is Row-Pack with the axes
//! swapped. Coordinates below are "main" (along a strip) and "cross"
//! (across strips, the direction strips stack in).

use vidwall_common::types::Size;

use super::{Strategy, StrategyKind};
use crate::geometry::{center_offset, MIN_EXTENT};
use crate::layout::{Cell, LayoutItem};

/// A strip may run this far past the container before it is closed; the
/// per-strip shrink brings it back inside.
pub const STRIP_OVERFLOW_TOLERANCE: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Strips are rows filling left to right, stacked top to bottom.
    Rows,
    /// Strips are columns filling top to bottom, stacked left to right.
    Columns,
}

impl Axis {
    fn split(self, container: Size) -> (f64, f64) {
        match self {
            Axis::Rows => (container.width, container.height),
            Axis::Columns => (container.height, container.width),
        }
    }

    /// Length along the strip per unit of strip thickness.
    fn stretch(self, item: &LayoutItem) -> f64 {
        match self {
            Axis::Rows => item.ratio(),
            Axis::Columns => 1.0 / item.ratio(),
        }
    }

    fn to_cell(self, item: &LayoutItem, span: &Span) -> Cell {
        let (x, y, width, height) = match self {
            Axis::Rows => (span.main, span.cross, span.main_len, span.cross_len),
            Axis::Columns => (span.cross, span.main, span.cross_len, span.main_len),
        };
        Cell {
            stream_id: item.id.clone(),
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    main: f64,
    cross: f64,
    main_len: f64,
    cross_len: f64,
}

/// Greedy strip packing along `axis`. Cells come back in input order.
pub(crate) fn pack(container: Size, items: &[LayoutItem], axis: Axis) -> Vec<Cell> {
    let (main, cross) = axis.split(container);
    let target = cross / (items.len() as f64).sqrt().ceil();
    let limit = main * STRIP_OVERFLOW_TOLERANCE;

    let mut spans = Vec::with_capacity(items.len());
    let mut stacked = 0.0;
    let mut next = 0;

    while next < items.len() {
        // Clamp to what is left; once the container is used up, keep going at
        // the target thickness and let the final shrink absorb the overflow.
        let remaining = cross - stacked;
        let thickness = if remaining > MIN_EXTENT {
            target.min(remaining)
        } else {
            target
        };

        let start = next;
        let mut strip_len = 0.0;
        while next < items.len() {
            let len = thickness * axis.stretch(&items[next]);
            if next > start && strip_len + len > limit {
                break;
            }
            strip_len += len;
            next += 1;
        }

        let scale = (main / strip_len).min(1.0);
        let strip_thickness = thickness * scale;
        let mut cursor = center_offset(main, strip_len * scale);
        for item in &items[start..next] {
            let len = thickness * axis.stretch(item) * scale;
            spans.push(Span {
                main: cursor,
                cross: stacked,
                main_len: len,
                cross_len: strip_thickness,
            });
            cursor += len;
        }
        stacked += strip_thickness;
    }

    // Shrink an over-full stack, then center it on both axes.
    let fit = if stacked > cross { cross / stacked } else { 1.0 };
    let main_shift = center_offset(main, main * fit);
    let cross_shift = center_offset(cross, stacked * fit);

    items
        .iter()
        .zip(spans)
        .map(|(item, span)| {
            let span = Span {
                main: span.main * fit + main_shift,
                cross: span.cross * fit + cross_shift,
                main_len: span.main_len * fit,
                cross_len: span.cross_len * fit,
            };
            axis.to_cell(item, &span)
        })
        .collect()
}

/// Fills horizontal rows of uniform height.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowPack;

impl Strategy for RowPack {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RowPack
    }

    fn place(&self, container: Size, items: &[LayoutItem]) -> Vec<Cell> {
        pack(container, items, Axis::Rows)
    }
}

/// Fills vertical columns of uniform width.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnPack;

impl Strategy for ColumnPack {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ColumnPack
    }

    fn place(&self, container: Size, items: &[LayoutItem]) -> Vec<Cell> {
        pack(container, items, Axis::Columns)
    }
}
