//! Balanced grid: the uniform grid whose cells best match 16:9 while
//! leaving the fewest empty slots.

use vidwall_common::types::Size;

use super::{Strategy, StrategyKind};
use crate::layout::{place_in_grid, Cell, LayoutItem};

/// Cell shape the search aims for.
pub const BALANCED_TARGET_RATIO: f64 = 16.0 / 9.0;

const RATIO_WEIGHT: f64 = 0.4;
const FILL_WEIGHT: f64 = 0.6;

/// Score a `rows` x `cols` grid for `count` items in `container`.
pub fn grid_score(container: Size, count: usize, rows: usize, cols: usize) -> f64 {
    let cell_ratio = (container.width / cols as f64) / (container.height / rows as f64);
    let ratio_score = 1.0 - (cell_ratio - BALANCED_TARGET_RATIO).abs() / BALANCED_TARGET_RATIO;
    let fill_score = count as f64 / (rows * cols) as f64;
    ratio_score * RATIO_WEIGHT + fill_score * FILL_WEIGHT
}

/// Best `(rows, cols)` over every row count from 1 to `count`. The first
/// candidate wins ties.
pub fn choose_grid(container: Size, count: usize) -> (usize, usize) {
    let mut best = (1, count.max(1));
    let mut best_score = f64::NEG_INFINITY;
    for rows in 1..=count {
        let cols = count.div_ceil(rows);
        let score = grid_score(container, count, rows, cols);
        if score > best_score {
            best_score = score;
            best = (rows, cols);
        }
    }
    best
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedGrid;

impl Strategy for BalancedGrid {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BalancedGrid
    }

    fn place(&self, container: Size, items: &[LayoutItem]) -> Vec<Cell> {
        let (rows, cols) = choose_grid(container, items.len());
        place_in_grid(container, items, rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_container_four_items_is_two_by_two() {
        assert_eq!(choose_grid(Size::new(1000.0, 1000.0), 4), (2, 2));
    }

    #[test]
    fn wide_container_three_items() {
        // rows=1: cells 640x1080 (0.59), rows=2: 960x540 (16:9) but one
        // empty slot, rows=3: 1920x360 (5.3).
        let container = Size::new(1920.0, 1080.0);
        let one = grid_score(container, 3, 1, 3);
        let two = grid_score(container, 3, 2, 2);
        assert!(two > one);
        assert_eq!(choose_grid(container, 3), (2, 2));
    }

    #[test]
    fn perfect_grid_scores_one() {
        let score = grid_score(Size::new(1920.0, 1080.0), 4, 2, 2);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_item_is_one_by_one() {
        assert_eq!(choose_grid(Size::new(300.0, 900.0), 1), (1, 1));
    }

    #[test]
    fn placement_keeps_ratios_and_bounds() {
        let container = Size::new(1280.0, 720.0);
        let items: Vec<LayoutItem> = [16.0 / 9.0, 4.0 / 3.0, 9.0 / 16.0, 1.0, 21.0 / 9.0]
            .iter()
            .enumerate()
            .map(|(i, r)| LayoutItem::new(format!("s{i}"), *r))
            .collect();
        let cells = BalancedGrid.place(container, &items);
        assert_eq!(cells.len(), items.len());
        for (cell, item) in cells.iter().zip(&items) {
            assert!((cell.width / cell.height - item.ratio()).abs() / item.ratio() < 0.01);
            assert!(cell.x >= 0.0 && cell.y >= 0.0);
            assert!(cell.x + cell.width <= 1280.0 + 1e-6);
            assert!(cell.y + cell.height <= 720.0 + 1e-6);
        }
    }
}
