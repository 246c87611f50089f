//! Wall layout configuration types.

use serde::{Deserialize, Serialize};
use vidwall_common::types::LayoutMode;

/// Layout defaults for the wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Mode the wall starts in.
    pub mode: LayoutMode,
    /// Ratio for streams that report none (valid range: 0.1-10.0).
    pub default_aspect_ratio: f64,
    /// Viewport width when none is given (valid range: 1-16384).
    pub viewport_width: f64,
    /// Viewport height when none is given (valid range: 1-16384).
    pub viewport_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Tetris,
            default_aspect_ratio: 16.0 / 9.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
