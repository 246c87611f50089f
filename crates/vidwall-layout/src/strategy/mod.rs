//! Packing strategies and the tetris dispatcher that picks between them.

mod balanced;
mod dispatch;
mod skyline;
mod strip;


use std::fmt;

use serde::{Deserialize, Serialize};
use vidwall_common::types::Size;

use crate::layout::{Cell, LayoutItem, LayoutResult};

pub use balanced::{choose_grid, grid_score, BalancedGrid, BALANCED_TARGET_RATIO};
pub use dispatch::{calculate_tetris_layout, evaluate_strategies, single_item_layout};
pub use skyline::{
    Placement, Segment, Skyline, SkylinePack, SKYLINE_MAX_UPSCALE, SKYLINE_MAX_WIDTH_FRACTION,
    SKYLINE_MERGE_TOLERANCE,
};
pub use strip::{ColumnPack, RowPack, STRIP_OVERFLOW_TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    RowPack,
    ColumnPack,
    Skyline,
    BalancedGrid,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::RowPack => "row-pack",
            StrategyKind::ColumnPack => "column-pack",
            StrategyKind::Skyline => "skyline",
            StrategyKind::BalancedGrid => "balanced-grid",
        };
        f.write_str(name)
    }
}

/// A packing heuristic: container and items in, placed cells out.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Place every item. Only called with at least one item and a drawable
    /// container.
    fn place(&self, container: Size, items: &[LayoutItem]) -> Vec<Cell>;

    fn layout(&self, container: Size, items: &[LayoutItem]) -> LayoutResult {
        if items.is_empty() || !container.is_drawable() {
            return LayoutResult::empty();
        }
        LayoutResult::from_cells(self.place(container, items), container)
    }
}

/// Every strategy, in evaluation order. Earlier entries win efficiency ties.
pub const STRATEGIES: [&dyn Strategy; 4] = [&RowPack, &ColumnPack, &SkylinePack, &BalancedGrid];
