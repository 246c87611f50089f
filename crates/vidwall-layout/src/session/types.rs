//! Core types and constructors for WallSession.

use serde::{Deserialize, Serialize};
use vidwall_common::types::{LayoutMode, StreamId};

use crate::carousel::CarouselState;
use crate::layout::LayoutResult;

/// Per-wall presentation state: the active mode and the carousel
/// selection. Everything else is recomputed from the caller's inputs on
/// each layout request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSession {
    pub(super) mode: LayoutMode,
    pub(super) carousel: CarouselState,
}

impl WallSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in a specific mode.
    pub fn with_mode(mode: LayoutMode) -> Self {
        Self {
            mode,
            carousel: CarouselState::new(),
        }
    }

    // -- Accessors --

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselState {
        &mut self.carousel
    }
}

/// One item's place in the carousel, relative to the frontmost one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSlot {
    pub stream_id: StreamId,
    pub offset: isize,
}

/// What the renderer needs for the depth carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselView {
    pub selected: usize,
    /// Items front to back.
    pub slots: Vec<DepthSlot>,
}

impl CarouselView {
    pub fn front(&self) -> Option<&StreamId> {
        self.slots.first().map(|s| &s.stream_id)
    }
}

/// The result of a layout request, shaped by the active mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Arrangement {
    Packed(LayoutResult),
    Carousel(CarouselView),
}
