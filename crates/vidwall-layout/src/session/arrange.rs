//! Routing a layout request to the active mode.

use vidwall_common::types::{LayoutMode, Size};

use crate::layout::{calculate_standard_layout, LayoutItem};
use crate::strategy::calculate_tetris_layout;

use super::{Arrangement, CarouselView, DepthSlot, WallSession};

impl WallSession {
    /// Lay out `items` for the current mode. Carousel mode never runs the
    /// packers; it only orders items around the selection.
    pub fn arrange(&self, container: Size, items: &[LayoutItem]) -> Arrangement {
        match self.mode {
            LayoutMode::Standard => Arrangement::Packed(calculate_standard_layout(container, items)),
            LayoutMode::Tetris => Arrangement::Packed(calculate_tetris_layout(container, items)),
            LayoutMode::Carousel => Arrangement::Carousel(self.carousel_view(items)),
        }
    }

    /// Depth ordering of `items` around the selected one.
    pub fn carousel_view(&self, items: &[LayoutItem]) -> CarouselView {
        let count = items.len();
        let mut carousel = self.carousel;
        let selected = carousel.clamp(count);
        let slots = carousel
            .depth_order(count)
            .into_iter()
            .map(|i| DepthSlot {
                stream_id: items[i].id.clone(),
                offset: carousel.depth_offset(i, count),
            })
            .collect();
        CarouselView { selected, slots }
    }
}
