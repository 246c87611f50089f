//! Layout input/output types and the standard grid mode.

mod grid;
mod types;

pub(crate) use grid::place_in_grid;
pub use grid::{calculate_standard_layout, standard_grid_shape};
pub use types::*;
