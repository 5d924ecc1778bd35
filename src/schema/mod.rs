//! Schema module - Configuration and seeding types for Game of Life simulations.

mod config;
mod seed;

pub(crate) use config::validate_saturation;
pub use config::*;
pub use seed::*;
