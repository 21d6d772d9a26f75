// Domain layer - the generation engine
pub mod domain;

// Application layer - session state the front-end drives
pub mod application;

// Infrastructure layer - saving and loading generations
pub mod persistence;

// Re-exports for convenience
pub use domain::{Boundary, Cell, Coord, DenseGrid, Generation, Pattern, SparseCellSet, presets};
pub use application::{Session, View};
pub use persistence::{PersistError, SessionFile};
