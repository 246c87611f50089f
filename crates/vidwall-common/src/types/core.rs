use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict interior overlap; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect, tolerance: f64) -> bool {
        self.x + tolerance < other.right()
            && other.x + tolerance < self.right()
            && self.y + tolerance < other.bottom()
            && other.y + tolerance < self.bottom()
    }
}

/// Width and height of the viewport the wall is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Finite and strictly positive in both dimensions.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Opaque identifier of a stream tile. The engine never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StreamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StreamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How the wall presents its streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Plain uniform grid.
    Standard,
    /// Best of the bin-packing strategies.
    #[default]
    Tetris,
    /// One frontmost stream, the rest ordered by depth.
    Carousel,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Standard, LayoutMode::Tetris, LayoutMode::Carousel];

    /// The mode after this one when the user toggles modes.
    pub fn next(self) -> Self {
        match self {
            LayoutMode::Standard => LayoutMode::Tetris,
            LayoutMode::Tetris => LayoutMode::Carousel,
            LayoutMode::Carousel => LayoutMode::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Standard => "standard",
            LayoutMode::Tetris => "tetris",
            LayoutMode::Carousel => "carousel",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "grid" => Ok(LayoutMode::Standard),
            "tetris" => Ok(LayoutMode::Tetris),
            "carousel" | "depth" => Ok(LayoutMode::Carousel),
            other => Err(format!(
                "unknown layout mode '{other}' (expected standard, tetris or carousel)"
            )),
        }
    }
}
