//! Layout engine for a multi-stream video wall.
//!
//! Everything here is pure computation over a container size and a list of
//! aspect-ratio items. The only state is [`CarouselState`], held by the
//! caller inside a [`WallSession`].

pub mod carousel;
pub mod commands;
pub mod geometry;
pub mod layout;
pub mod session;
pub mod strategy;

pub use carousel::CarouselState;
pub use commands::WallCommand;
pub use layout::{calculate_standard_layout, Cell, LayoutItem, LayoutResult};
pub use session::{Arrangement, CarouselView, WallSession};
pub use strategy::{calculate_tetris_layout, evaluate_strategies, Strategy, StrategyKind};
