//! Sparse representation: only live coordinates are stored and the plane
//! is unbounded in every direction.

use super::{Cell, Coord, DenseGrid, Generation, neighbors};
use ahash::AHashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseCellSet {
    cells: AHashSet<Coord>,
}

impl SparseCellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest rectangle holding every live cell as `(min, max)` corners,
    /// or `None` when empty
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let mut cells = self.cells.iter();
        let &first = cells.next()?;
        Some(cells.fold((first, first), |((min_x, min_y), (max_x, max_y)), &(x, y)| {
            ((min_x.min(x), min_y.min(y)), (max_x.max(x), max_y.max(y)))
        }))
    }

    /// Live cells ordered by row, then column
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|&(x, y)| (y, x));
        cells
    }

    /// Every cell shifted by `(dx, dy)`
    pub fn translated(&self, (dx, dy): Coord) -> Self {
        self.cells
            .iter()
            .map(|&(x, y)| (x.wrapping_add(dx), y.wrapping_add(dy)))
            .collect()
    }
}

impl FromIterator<Coord> for SparseCellSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<&DenseGrid> for SparseCellSet {
    fn from(grid: &DenseGrid) -> Self {
        grid.live_cells().collect()
    }
}

impl Generation for SparseCellSet {
    fn is_alive(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    fn neighbor_count(&self, coord: Coord) -> u8 {
        neighbors(coord).filter(|n| self.cells.contains(n)).count() as u8
    }

    /// Only live cells and their dead neighbors can be alive next
    /// generation, so nothing else is examined.
    fn advance(&self) -> Self {
        let mut next = AHashSet::with_capacity(self.cells.len());
        let mut births_checked = AHashSet::new();

        for &coord in &self.cells {
            if Cell::Alive.evolve(self.neighbor_count(coord)).is_alive() {
                next.insert(coord);
            }
            for around in neighbors(coord) {
                if self.cells.contains(&around) || !births_checked.insert(around) {
                    continue;
                }
                if Cell::Dead.evolve(self.neighbor_count(around)).is_alive() {
                    next.insert(around);
                }
            }
        }

        Self { cells: next }
    }

    /// Every coordinate is representable, so this never rejects
    fn set(&mut self, coord: Coord, alive: bool) -> bool {
        if alive {
            self.cells.insert(coord);
        } else {
            self.cells.remove(&coord);
        }
        true
    }

    fn clear(&mut self) {
        self.cells.clear();
    }

    fn live_cells(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(self.cells.iter().copied())
    }

    fn population(&self) -> usize {
        self.cells.len()
    }
}
