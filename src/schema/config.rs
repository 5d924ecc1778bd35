//! Configuration types for Game of Life simulation parameters.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Seed;

/// Top-level simulation configuration.
///
/// Built once at startup (defaults, JSON file, command line) and passed
/// by value into [`crate::compute::Simulator`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width and height of the square board in cells. Must be non-zero.
    pub board_size: usize,
    /// Number of generations to advance. Zero renders only the initial board.
    pub generations: u64,
    /// Probability that a cell starts alive (0.0-1.0).
    pub saturation: f64,
    /// Seconds paused between generations. Must be finite and non-negative.
    pub frame_delay: f64,
    /// Seed for the random source. `None` draws from entropy.
    pub rng_seed: Option<u64>,
    /// Initial board pattern.
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board_size: 25,
            generations: 100,
            saturation: 0.4,
            frame_delay: 0.2,
            rng_seed: None,
            seed: Seed::default(),
        }
    }
}

impl SimulationConfig {
    /// Number of frames a full run renders (the initial board plus one per generation).
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.generations + 1
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }
        validate_saturation(self.saturation)?;
        self.frame_delay_duration()?;
        Ok(())
    }

    /// Pause between generations, rejecting values no `Duration` can hold.
    pub fn frame_delay_duration(&self) -> Result<Duration, ConfigError> {
        if !self.frame_delay.is_finite() || self.frame_delay < 0.0 {
            return Err(ConfigError::InvalidFrameDelay(self.frame_delay));
        }
        Duration::try_from_secs_f64(self.frame_delay)
            .map_err(|_| ConfigError::InvalidFrameDelay(self.frame_delay))
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }
}

/// Reject saturations outside `[0.0, 1.0]`, NaN included.
pub(crate) fn validate_saturation(saturation: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&saturation) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSaturation(saturation))
    }
}

/// Configuration errors.
///
/// Every construction-time violation lands here; nothing is simulated
/// when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size must be non-zero")]
    InvalidBoardSize,
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Saturation must be within [0.0, 1.0] (got {0})")]
    InvalidSaturation(f64),
    #[error("Frame delay must be a non-negative number of seconds (got {0})")]
    InvalidFrameDelay(f64),
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::schema::Pattern;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 25);
        assert_eq!(config.generations, 100);
        assert_eq!(config.frame_count(), 101);
    }

    #[test]
    fn test_rejects_zero_board() {
        let config = SimulationConfig {
            board_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBoardSize)
        ));
    }

    #[test]
    fn test_rejects_saturation_out_of_range() {
        for saturation in [1.5, -0.1, f64::NAN] {
            let config = SimulationConfig {
                saturation,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSaturation(_))
            ));
        }
    }

    #[test]
    fn test_saturation_bounds_inclusive() {
        for saturation in [0.0, 1.0] {
            let config = SimulationConfig {
                saturation,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_bad_frame_delay() {
        for frame_delay in [-0.5, f64::INFINITY, f64::NAN, 1e20] {
            let config = SimulationConfig {
                frame_delay,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidFrameDelay(_))
            ));
        }
    }

    #[test]
    fn test_frame_delay_duration() {
        let config = SimulationConfig {
            frame_delay: 0.25,
            ..Default::default()
        };
        assert_eq!(
            config.frame_delay_duration().unwrap(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "board_size": 8, "rng_seed": 7, "seed": {{ "pattern": {{ "type": "Blinker", "center": [4, 4] }} }} }}"#
        )
        .unwrap();

        let config = SimulationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.generations, 100);
        assert!(matches!(
            config.seed.pattern,
            Pattern::Blinker { center: (4, 4) }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulationConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ board_size: ").unwrap();
        let err = SimulationConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip_keeps_seed() {
        let config = SimulationConfig {
            rng_seed: Some(42),
            ..Default::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.rng_seed, Some(42));
        assert!(matches!(back.seed.pattern, Pattern::Random));
    }
}
