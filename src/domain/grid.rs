use super::{Boundary, Cell, Coord, Generation, NEIGHBOR_OFFSETS};
use rand::Rng;
use rayon::prelude::*;

/// DenseGrid stores a fixed-size rectangle of cells.
/// Every update returns a new grid; the source is only ever read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    width: usize,
    height: usize,
    boundary: Boundary,
    cells: Vec<Cell>,
}

impl DenseGrid {
    /// Create a new grid with all cells initially dead and a frozen border
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_boundary(width, height, Boundary::default())
    }

    pub fn with_boundary(width: usize, height: usize, boundary: Boundary) -> Self {
        Self {
            width,
            height,
            boundary,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from live coordinates, dropping any that fall outside it
    pub fn from_live_cells(
        width: usize,
        height: usize,
        boundary: Boundary,
        live: impl IntoIterator<Item = Coord>,
    ) -> Self {
        let mut grid = Self::with_boundary(width, height, boundary);
        for coord in live {
            grid.set(coord, true);
        }
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn index_of(&self, (x, y): Coord) -> Option<usize> {
        let in_range = (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y);
        in_range.then(|| self.get_index(x as usize, y as usize))
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether (x, y) lies on the outermost ring
    pub const fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Count live neighbors of an in-range cell, resolving edges through
    /// the boundary policy
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        self.count_around(x as i64, y as i64)
    }

    fn count_around(&self, x: i64, y: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                self.boundary
                    .resolve(x.wrapping_add(dx), y.wrapping_add(dy), self.width, self.height)
            })
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// State of (x, y) in the next generation
    fn next_cell(&self, x: usize, y: usize) -> Cell {
        let current = self.cells[self.get_index(x, y)];
        if self.boundary == Boundary::Frozen && self.is_border(x, y) {
            return current;
        }
        current.evolve(self.count_live_neighbors(x, y))
    }

    /// Row-parallel evolution using rayon; produces the same grid as
    /// `advance`
    pub fn advance_parallel(&self) -> Self {
        let width = self.width;
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..width).map(move |x| self.next_cell(x, y)))
            .collect();

        Self {
            cells,
            ..self.clone_shape()
        }
    }

    fn clone_shape(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            boundary: self.boundary,
            cells: Vec::new(),
        }
    }

    /// Fill every cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Rows of 0/1, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.cells[self.get_index(x, y)].is_alive() as u8)
                    .collect()
            })
            .collect()
    }
}

impl Generation for DenseGrid {
    fn is_alive(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some_and(|idx| self.cells[idx].is_alive())
    }

    fn neighbor_count(&self, (x, y): Coord) -> u8 {
        self.count_around(x, y)
    }

    fn advance(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            cells,
            ..self.clone_shape()
        }
    }

    fn set(&mut self, coord: Coord, alive: bool) -> bool {
        match self.index_of(coord) {
            Some(idx) => {
                self.cells[idx] = Cell::from_alive(alive);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    fn live_cells(&self) -> Box<dyn Iterator<Item = Coord> + '_> {
        Box::new(
            self.iter_cells()
                .filter(|(_, _, cell)| cell.is_alive())
                .map(|(x, y, _)| (x as i64, y as i64)),
        )
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
