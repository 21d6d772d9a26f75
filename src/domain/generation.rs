//! Common interface shared by the dense and sparse representations.
//!
//! Renderers iterate `live_cells`, input handlers call `set`/`toggle`,
//! and the simulation loop calls `advance`. Every implementation builds
//! the next generation into a fresh buffer and leaves `self` untouched.

/// Integer cell coordinate: `(x, y)` with `x` the column and `y` the row.
pub type Coord = (i64, i64);

/// Offsets of the 8 cells of the Moore neighborhood.
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Moore neighbors of `coord`. Arithmetic wraps at the `i64` range.
pub fn neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
    let (x, y) = coord;
    NEIGHBOR_OFFSETS
        .into_iter()
        .map(move |(dx, dy)| (x.wrapping_add(dx), y.wrapping_add(dy)))
}

/// A snapshot of cell states at one simulation step.
pub trait Generation: Clone {
    /// Whether the cell at `coord` is alive. Coordinates the container
    /// cannot hold are dead.
    fn is_alive(&self, coord: Coord) -> bool;

    /// Number of live cells among the 8 neighbors of `coord`, in `0..=8`.
    fn neighbor_count(&self, coord: Coord) -> u8;

    /// Compute the next generation under B3/S23.
    fn advance(&self) -> Self;

    /// Set the state of one cell. Returns `false` when the coordinate is
    /// rejected and nothing changed.
    fn set(&mut self, coord: Coord, alive: bool) -> bool;

    /// Kill every cell.
    fn clear(&mut self);

    fn live_cells(&self) -> Box<dyn Iterator<Item = Coord> + '_>;

    fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Flip one cell. Returns `false` when the coordinate is rejected.
    fn toggle(&mut self, coord: Coord) -> bool {
        let alive = self.is_alive(coord);
        self.set(coord, !alive)
    }

    /// Apply `advance` `n` times.
    fn advance_by(&self, n: usize) -> Self {
        (0..n).fold(self.clone(), |generation, _| generation.advance())
    }
}
