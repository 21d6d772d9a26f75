mod cell;
mod boundary;
mod generation;
mod grid;
mod cell_set;
mod patterns;

pub use cell::Cell;
pub use boundary::Boundary;
pub use generation::{Coord, Generation, NEIGHBOR_OFFSETS, neighbors};
pub use grid::DenseGrid;
pub use cell_set::SparseCellSet;
pub use patterns::{Pattern, presets};
