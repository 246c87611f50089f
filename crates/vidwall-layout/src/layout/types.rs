//! Layout input and output types.

use serde::{Deserialize, Serialize};
use vidwall_common::types::{Rect, Size, StreamId};

/// Aspect ratio assumed for items whose ratio is missing or unusable.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Narrowest ratio the strategies pack with. Keeps `1 / ratio` and the
/// per-strip products finite.
pub const MIN_ASPECT_RATIO: f64 = 1e-4;

/// Widest ratio the strategies pack with.
pub const MAX_ASPECT_RATIO: f64 = 1e4;

/// Replace a non-finite or non-positive ratio with [`DEFAULT_ASPECT_RATIO`]
/// and clamp the rest into `[MIN_ASPECT_RATIO, MAX_ASPECT_RATIO]`.
pub fn sanitize_ratio(aspect_ratio: f64) -> f64 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio.clamp(MIN_ASPECT_RATIO, MAX_ASPECT_RATIO)
    } else {
        DEFAULT_ASPECT_RATIO
    }
}

/// One stream to place: an opaque id plus its native `width / height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: StreamId,
    pub aspect_ratio: f64,
}

impl LayoutItem {
    pub fn new(id: impl Into<StreamId>, aspect_ratio: f64) -> Self {
        Self {
            id: id.into(),
            aspect_ratio,
        }
    }

    /// The ratio the strategies pack with.
    pub fn ratio(&self) -> f64 {
        sanitize_ratio(self.aspect_ratio)
    }
}

/// A placed item in container coordinates (top-left origin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub stream_id: StreamId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Cell {
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The cells of one layout pass plus the numbers the UI shows alongside it.
///
/// `rows` and `cols` are advisory counts for keyboard navigation, not grid
/// coordinates of the cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub cells: Vec<Cell>,
    pub rows: usize,
    pub cols: usize,
    /// Covered area over container area. Not clamped.
    pub efficiency: f64,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
            efficiency: 0.0,
        }
    }

    /// Build a result from finished cells, deriving efficiency and the
    /// navigation counts.
    ///
    /// `cols` is the container width over the mean cell width, rounded;
    /// `rows` is however many such columns the cells need.
    pub fn from_cells(cells: Vec<Cell>, container: Size) -> Self {
        if cells.is_empty() {
            return Self::empty();
        }
        let count = cells.len();
        let mean_width = cells.iter().map(|c| c.width).sum::<f64>() / count as f64;
        let cols = if mean_width > 0.0 {
            ((container.width / mean_width).round() as usize).max(1)
        } else {
            1
        };
        let rows = count.div_ceil(cols);
        let efficiency = coverage(&cells, container);
        Self {
            cells,
            rows,
            cols,
            efficiency,
        }
    }

    /// Override the derived counts with a known grid shape.
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Efficiency as a whole percentage, the way the wall's status line shows it.
    pub fn efficiency_percent(&self) -> u32 {
        (self.efficiency * 100.0).round().max(0.0) as u32
    }

    /// True when the efficiency and every cell coordinate are finite.
    pub fn is_finite(&self) -> bool {
        self.efficiency.is_finite()
            && self.cells.iter().all(|c| {
                c.x.is_finite() && c.y.is_finite() && c.width.is_finite() && c.height.is_finite()
            })
    }

    /// Look up the cell placed for a stream.
    pub fn cell(&self, id: &StreamId) -> Option<&Cell> {
        self.cells.iter().find(|c| &c.stream_id == id)
    }
}

/// Fraction of the container covered by `cells`.
pub fn coverage(cells: &[Cell], container: Size) -> f64 {
    let area = container.area();
    if area <= 0.0 || !area.is_finite() {
        return 0.0;
    }
    cells.iter().map(Cell::area).sum::<f64>() / area
}
