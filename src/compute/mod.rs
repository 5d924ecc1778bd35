//! Compute module - Board state, transition rule and run loop.

mod grid;
mod simulator;
mod stats;

pub use grid::*;
pub use simulator::*;
pub use stats::*;
