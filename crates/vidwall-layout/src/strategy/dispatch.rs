//! The tetris dispatcher: run every strategy, keep the most efficient.

use tracing::debug;
use vidwall_common::types::Size;

use super::{StrategyKind, STRATEGIES};
use crate::geometry::{center_offset, fit_to_box};
use crate::layout::{Cell, LayoutItem, LayoutResult};

/// Lay out `items` with whichever strategy covers the most of `container`.
///
/// Zero items, or a container that is not finite and positive, give an
/// empty result. A single item is fitted and centered directly.
pub fn calculate_tetris_layout(container: Size, items: &[LayoutItem]) -> LayoutResult {
    if !container.is_drawable() {
        debug!(
            width = container.width,
            height = container.height,
            "tetris layout: container has no drawable area"
        );
        return LayoutResult::empty();
    }
    match items.len() {
        0 => LayoutResult::empty(),
        1 => single_item_layout(container, &items[0]),
        _ => {
            let mut best: Option<(StrategyKind, LayoutResult)> = None;
            for (kind, result) in evaluate_strategies(container, items) {
                debug!(strategy = %kind, efficiency = result.efficiency, "strategy evaluated");
                if !result.is_finite() {
                    debug!(strategy = %kind, "strategy produced non-finite geometry, skipped");
                    continue;
                }
                if best
                    .as_ref()
                    .map_or(true, |(_, b)| result.efficiency > b.efficiency)
                {
                    best = Some((kind, result));
                }
            }
            match best {
                Some((kind, result)) => {
                    debug!(
                        strategy = %kind,
                        efficiency = result.efficiency,
                        items = items.len(),
                        "tetris layout chosen"
                    );
                    result
                }
                None => LayoutResult::empty(),
            }
        }
    }
}

/// Run every strategy on the same input, in evaluation order.
pub fn evaluate_strategies(
    container: Size,
    items: &[LayoutItem],
) -> Vec<(StrategyKind, LayoutResult)> {
    STRATEGIES
        .iter()
        .map(|strategy| (strategy.kind(), strategy.layout(container, items)))
        .collect()
}

/// One item, scaled to fit and centered.
pub fn single_item_layout(container: Size, item: &LayoutItem) -> LayoutResult {
    if !container.is_drawable() {
        return LayoutResult::empty();
    }
    let fitted = fit_to_box(container, item.ratio());
    let cell = Cell {
        stream_id: item.id.clone(),
        x: center_offset(container.width, fitted.width),
        y: center_offset(container.height, fitted.height),
        width: fitted.width,
        height: fitted.height,
    };
    LayoutResult::from_cells(vec![cell], container)
}
