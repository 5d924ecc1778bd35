//! Simulator - Main run loop for the Game of Life.
//!
//! Sequences render, step and pause for a fixed number of generations.

use std::io;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Grid, GridStats};
use crate::render::{Display, Frame, Pause};
use crate::schema::{ConfigError, SimulationConfig};

/// Lifecycle of a [`Simulator`]. There is no transition out of `Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Initialized,
    Running,
    Complete,
}

/// Errors raised by [`Simulator`].
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to render frame: {0}")]
    Display(#[from] io::Error),
    #[error("Simulation has already been run")]
    AlreadyRun,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SimulationSummary {
    /// Frames handed to the display, including the initial board.
    pub frames_rendered: u64,
    /// Transitions applied to the grid.
    pub generations: u64,
    pub final_stats: GridStats,
}

/// Owns the grid and drives it through `generations` transitions.
pub struct Simulator {
    grid: Grid,
    generations: u64,
    frame_delay: Duration,
    generation: u64,
    state: SimulatorState,
}

impl Simulator {
    /// Create a simulator, drawing the initial board from `rng`.
    ///
    /// The configuration is validated before any grid is built.
    pub fn new<R: Rng + ?Sized>(
        config: &SimulationConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::from_seed(
            &config.seed,
            config.board_size,
            config.board_size,
            config.saturation,
            rng,
        )?;

        Ok(Self {
            grid,
            generations: config.generations,
            frame_delay: config.frame_delay_duration()?,
            generation: 0,
            state: SimulatorState::Initialized,
        })
    }

    /// Create a simulator with a random source seeded from `config.rng_seed`,
    /// or from entropy when none is set.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, &mut rng)
    }

    /// Run every generation: render, then (unless this was the last frame)
    /// advance the grid and pause.
    ///
    /// `generations == 0` renders only the initial board. A simulator runs
    /// once; calling this again returns [`SimulationError::AlreadyRun`].
    pub fn run<D: Display, P: Pause>(
        &mut self,
        mut display: D,
        mut pause: P,
    ) -> Result<SimulationSummary, SimulationError> {
        if self.state != SimulatorState::Initialized {
            return Err(SimulationError::AlreadyRun);
        }
        self.state = SimulatorState::Running;
        info!(
            "Running {} generation(s) on a {}x{} board ({} live cells)",
            self.generations,
            self.grid.width(),
            self.grid.height(),
            self.grid.live_cells()
        );

        let mut frames_rendered = 0u64;
        loop {
            display.render(&Frame {
                generation: self.generation,
                grid: &self.grid,
            })?;
            frames_rendered += 1;

            if self.generation == self.generations {
                break;
            }

            self.grid.next_generation();
            self.generation += 1;
            debug!(
                "Generation {}: {} live cells",
                self.generation,
                self.grid.live_cells()
            );

            pause.pause(self.frame_delay);
        }

        self.state = SimulatorState::Complete;
        let summary = SimulationSummary {
            frames_rendered,
            generations: self.generation,
            final_stats: GridStats::from_grid(&self.grid),
        };
        info!(
            "Finished after {} generation(s): {} live cells ({:.1}% density)",
            summary.generations,
            summary.final_stats.live_cells,
            summary.final_stats.density * 100.0
        );
        Ok(summary)
    }

    #[inline]
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    /// Current generation index (0 until the first transition).
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
