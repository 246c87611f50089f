//! Carousel selection state.

use serde::{Deserialize, Serialize};

/// Which item the depth carousel shows frontmost.
///
/// The item count is passed to every operation instead of being stored,
/// because the filtered item list can change between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub(super) index: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected index.
    pub fn get(&self) -> usize {
        self.index
    }

    /// Select an index directly. Callers keep it within the item count.
    pub fn set(&mut self, index: usize) {
        self.index = index;
    }
}
