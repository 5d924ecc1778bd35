//! Seed types for initializing Game of Life boards.

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Complete seed specification for board initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Predefined patterns for initialization.
///
/// Coordinates are `(row, col)` with `(0, 0)` at the top-left corner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Every cell independently alive with probability `saturation`.
    #[default]
    Random,
    /// Vertical line of three cells centered on `center` (period-2 oscillator).
    Blinker { center: (usize, usize) },
    /// 2x2 still life.
    Block { top_left: (usize, usize) },
    /// Five-cell glider travelling down and to the right.
    Glider { top_left: (usize, usize) },
    /// Explicit list of live cells.
    Custom { cells: Vec<(usize, usize)> },
}

const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLOCK: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

impl Pattern {
    /// Live cells of a fixed pattern, or `None` for [`Pattern::Random`].
    ///
    /// Cells whose coordinates would overflow `usize` are dropped here;
    /// cells beyond the right or bottom edge are dropped by [`Seed::generate`].
    pub fn cells(&self) -> Option<Vec<(usize, usize)>> {
        let offset = |(row, col): (usize, usize), cells: &[(usize, usize)]| {
            cells
                .iter()
                .filter_map(|&(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
                .collect::<Vec<_>>()
        };

        match self {
            Pattern::Random => None,
            Pattern::Blinker { center: (row, col) } => {
                let mut cells = vec![(*row, *col)];
                if let Some(below) = row.checked_add(1) {
                    cells.push((below, *col));
                }
                match row.checked_sub(1) {
                    Some(above) => cells.insert(0, (above, *col)),
                    None => warn!("Blinker at row 0 is clipped by the top edge"),
                }
                Some(cells)
            }
            Pattern::Block { top_left } => Some(offset(*top_left, &BLOCK)),
            Pattern::Glider { top_left } => Some(offset(*top_left, &GLIDER)),
            Pattern::Custom { cells } => Some(cells.clone()),
        }
    }
}

impl Seed {
    /// Generate the initial cell buffer, row-major (`row * width + col`).
    ///
    /// `saturation` and `rng` are only consulted by [`Pattern::Random`].
    ///
    /// # Panics
    ///
    /// Panics if a random pattern is generated with `saturation` outside
    /// `[0.0, 1.0]`; [`crate::compute::Grid::from_seed`] validates it first.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        saturation: f64,
        rng: &mut R,
    ) -> Vec<bool> {
        let Some(cells) = self.pattern.cells() else {
            return (0..width * height)
                .map(|_| rng.gen_bool(saturation))
                .collect();
        };

        let mut grid = vec![false; width * height];
        let mut clipped = 0usize;
        for (row, col) in cells {
            if row < height && col < width {
                grid[row * width + col] = true;
            } else {
                clipped += 1;
            }
        }
        if clipped > 0 {
            warn!(
                "{} pattern cell(s) fall outside the {}x{} board and were ignored",
                clipped, width, height
            );
        }
        grid
    }
}
