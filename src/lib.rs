//! Conway's Game of Life on a finite square board.
//!
//! A board is seeded with a random density of live cells (or a fixed
//! pattern) and advanced a fixed number of generations, each generation
//! rendered to the terminal with a pause in between.
//!
//! # Architecture
//!
//! - `schema`: Configuration and seed patterns
//! - `compute`: The grid, the transition rule and the run loop
//! - `render`: Display and pause collaborators used by the run loop
//!
//! Cells outside the board are permanently dead; edges never wrap.
//!
//! # Example
//!
//! ```rust,no_run
//! use conway_life::{
//!     compute::Simulator,
//!     render::{TerminalDisplay, ThreadSleep},
//!     schema::SimulationConfig,
//! };
//!
//! let config = SimulationConfig {
//!     board_size: 40,
//!     generations: 200,
//!     ..Default::default()
//! };
//!
//! let mut simulator = Simulator::from_config(&config)?;
//! let summary = simulator.run(TerminalDisplay::stdout(), ThreadSleep)?;
//!
//! println!("{} cells alive at the end", summary.final_stats.live_cells);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Grid, GridStats, SimulationError, SimulationSummary, Simulator, SimulatorState};
pub use schema::{ConfigError, Pattern, Seed, SimulationConfig};
