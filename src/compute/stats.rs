//! Board statistics for monitoring.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Population statistics of a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub live_cells: usize,
    pub total_cells: usize,
    /// Fraction of cells alive (0.0-1.0).
    pub density: f64,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let live_cells = grid.live_cells();
        let total_cells = grid.len();
        Self {
            live_cells,
            total_cells,
            density: live_cells as f64 / total_cells as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_grid() {
        let grid = Grid::from_cells(4, 2, &[(0, 0), (1, 3)]).unwrap();
        let stats = GridStats::from_grid(&grid);
        assert_eq!(stats.live_cells, 2);
        assert_eq!(stats.total_cells, 8);
        assert!((stats.density - 0.25).abs() < 1e-12);
    }
}
