//! Wrap-around navigation and depth ordering.

use super::CarouselState;

impl CarouselState {
    /// Advance to the next item, wrapping to 0 after the last.
    pub fn next(&mut self, count: usize) -> usize {
        if count == 0 {
            self.index = 0;
        } else {
            self.index = (self.index % count + 1) % count;
        }
        self.index
    }

    /// Step back to the previous item, wrapping to the last from 0.
    pub fn prev(&mut self, count: usize) -> usize {
        if count == 0 {
            self.index = 0;
        } else {
            self.index = (self.index % count + count - 1) % count;
        }
        self.index
    }

    /// Pull the selection back inside `[0, count)` after the list shrank.
    pub fn clamp(&mut self, count: usize) -> usize {
        self.index = if count == 0 {
            0
        } else {
            self.index.min(count - 1)
        };
        self.index
    }

    /// Signed distance of `item` from the selected item, going the short
    /// way round. 0 is frontmost, positive is to the right.
    pub fn depth_offset(&self, item: usize, count: usize) -> isize {
        if count == 0 {
            return 0;
        }
        let selected = self.index % count;
        let forward = (item % count + count - selected) % count;
        if forward > count / 2 {
            forward as isize - count as isize
        } else {
            forward as isize
        }
    }

    /// Item indices from front to back; at equal depth, right before left.
    pub fn depth_order(&self, count: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by_key(|&i| {
            let offset = self.depth_offset(i, count);
            (offset.unsigned_abs(), offset < 0)
        });
        order
    }
}
