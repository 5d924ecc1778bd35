//! Board state and the Game of Life transition rule.
//!
//! The board is finite and not toroidal: every coordinate outside
//! `[0, height) x [0, width)` counts as permanently dead, so edge cells have
//! five candidate neighbours and corner cells three.

use rand::Rng;
use rayon::prelude::*;

use crate::schema::{ConfigError, Seed, validate_saturation};

/// Offsets of the eight Moore neighbours as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Next state of a single cell given its current state and live-neighbour count.
///
/// - alive with 2 or 3 neighbours survives
/// - alive with fewer than 2 dies (underpopulation)
/// - alive with more than 3 dies (overpopulation)
/// - dead with exactly 3 becomes alive (reproduction)
#[inline]
pub fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Dense boolean board.
///
/// Cells are stored row-major in a flat buffer: `[row * width + col]`.
/// A second buffer of the same size receives the next generation so that
/// every neighbour count reads the current generation only.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    /// Scratch buffer for the next generation (swapped in after each step).
    next: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        Ok(Self::from_buffer(width, height, vec![false; width * height]))
    }

    /// Create a grid where each cell is independently alive with probability `saturation`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        saturation: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::from_seed(&Seed::default(), width, height, saturation, rng)
    }

    /// Create a grid from a seed pattern.
    pub fn from_seed<R: Rng + ?Sized>(
        seed: &Seed,
        width: usize,
        height: usize,
        saturation: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        validate_dimensions(width, height)?;
        validate_saturation(saturation)?;
        let cells = seed.generate(width, height, saturation, rng);
        Ok(Self::from_buffer(width, height, cells))
    }

    /// Create a dead grid with the listed `(row, col)` cells alive.
    ///
    /// Coordinates outside the board are ignored.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: &[(usize, usize)],
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::dead(width, height)?;
        for &(row, col) in cells {
            if row < height && col < width {
                grid.set(row, col, true);
            }
        }
        Ok(grid)
    }

    fn from_buffer(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            next: vec![false; cells.len()],
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether the cell at `(row, col)` is alive. Out-of-bounds cells are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[self.idx(row, col)]
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the board.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside {}x{} board",
            row,
            col,
            self.width,
            self.height
        );
        let idx = self.idx(row, col);
        self.cells[idx] = alive;
    }

    /// Count live cells among the eight neighbours of `(row, col)`.
    ///
    /// Neighbours outside the board contribute nothing; the result is in `[0, 8]`.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        count_neighbors_in(&self.cells, self.width, self.height, row, col)
    }

    /// Advance the board by one generation.
    ///
    /// All counts are taken from the current buffer; the new generation is
    /// written to the scratch buffer and committed with a single swap.
    pub fn next_generation(&mut self) {
        let (width, height) = (self.width, self.height);
        let current = &self.cells;

        self.next
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out_row)| {
                for (col, out) in out_row.iter_mut().enumerate() {
                    let neighbors = count_neighbors_in(current, width, height, row, col);
                    *out = next_cell_state(current[row * width + col], neighbors);
                }
            });

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Iterate rows top to bottom; each row is `width` cells left to right.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells on the board.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// True when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[inline]
fn count_neighbors_in(cells: &[bool], width: usize, height: usize, row: usize, col: usize) -> u8 {
    let mut count = 0u8;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if r < height && c < width && cells[r * width + c] {
            count += 1;
        }
    }
    count
}
