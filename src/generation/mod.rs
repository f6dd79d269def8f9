//! # Generation Module
//!
//! Seeded placement of coins, obstacles and spikes.
//!
//! Every session is described by a [`SpawnConfig`]: how many of each entity
//! to place, how far apart they must be, and the seed that makes the layout
//! reproducible. Configs can come from the command line, the setup screen or
//! a JSON file.

pub mod placement;

pub use placement::*;

use crate::config::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::{CoinRushError, CoinRushResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many of each entity to place at session start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnCounts {
    pub obstacles: u32,
    pub spikes: u32,
    pub coins: u32,
}

impl SpawnCounts {
    pub fn new(obstacles: u32, spikes: u32, coins: u32) -> Self {
        Self {
            obstacles,
            spikes,
            coins,
        }
    }
}

/// Configuration for arena population.
///
/// # Examples
///
/// ```
/// use coinrush::{SpawnConfig, SpawnCounts};
///
/// let config = SpawnConfig::new(7, SpawnCounts::new(5, 3, 4));
/// assert_eq!(config.margin, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Random seed for reproducible layouts
    pub seed: u64,
    /// Entity counts
    pub counts: SpawnCounts,
    /// Minimum distance from a spawn center to the arena edge
    #[serde(default = "default_margin")]
    pub margin: i32,
    /// Minimum clearance around already placed entities
    #[serde(default = "default_min_spacing")]
    pub min_spacing: i32,
    /// Random candidates tried before an entity is skipped
    #[serde(default = "default_placement_attempts")]
    pub placement_attempts: u32,
}

fn default_margin() -> i32 {
    50
}

fn default_min_spacing() -> i32 {
    70
}

fn default_placement_attempts() -> u32 {
    100
}

impl SpawnConfig {
    /// Creates a configuration with the default spacing rules.
    pub fn new(seed: u64, counts: SpawnCounts) -> Self {
        Self {
            seed,
            counts,
            margin: default_margin(),
            min_spacing: default_min_spacing(),
            placement_attempts: default_placement_attempts(),
        }
    }

    /// Creates a small configuration for tests.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(seed, SpawnCounts::new(3, 2, 3))
    }

    /// Checks that the spacing rules fit inside the reference arena.
    pub fn validate(&self) -> CoinRushResult<()> {
        self.validate_for(ARENA_WIDTH, ARENA_HEIGHT)
    }

    /// Checks that the spacing rules fit inside a `width` x `height` arena.
    pub fn validate_for(&self, width: i32, height: i32) -> CoinRushResult<()> {
        if self.margin < 0 || self.min_spacing < 0 {
            return Err(CoinRushError::InvalidConfig(format!(
                "margin ({}) and min_spacing ({}) must not be negative",
                self.margin, self.min_spacing
            )));
        }
        if self.margin * 2 > width || self.margin * 2 > height {
            return Err(CoinRushError::InvalidConfig(format!(
                "margin {} leaves no room in a {}x{} arena",
                self.margin, width, height
            )));
        }
        Ok(())
    }

    /// Parses a configuration from JSON and validates it.
    pub fn load_from_json(json: &str) -> CoinRushResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load_from_json_file(path: impl AsRef<Path>) -> CoinRushResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_json(&json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn save_to_json(&self) -> CoinRushResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self::new(12345, SpawnCounts::new(5, 5, 5))
    }
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded RNG from the configuration.
    pub fn create_rng(config: &SpawnConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_config_defaults() {
        let config = SpawnConfig::new(1, SpawnCounts::new(1, 2, 3));
        assert_eq!(config.margin, 50);
        assert_eq!(config.min_spacing, 70);
        assert_eq!(config.placement_attempts, 100);
        assert_eq!(config.counts.spikes, 2);
    }

    #[test]
    fn test_config_json_fills_defaults() {
        let json = r#"{ "seed": 99, "counts": { "obstacles": 4, "spikes": 1, "coins": 6 } }"#;
        let config = SpawnConfig::load_from_json(json).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.counts, SpawnCounts::new(4, 1, 6));
        assert_eq!(config.margin, 50);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SpawnConfig::for_testing(42);
        let json = config.save_to_json().unwrap();
        assert_eq!(SpawnConfig::load_from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let result = SpawnConfig::load_from_json("{ \"seed\": \"nope\" }");
        assert!(matches!(result, Err(CoinRushError::Serde(_))));
    }

    #[test]
    fn test_config_rejects_oversized_margin() {
        let mut config = SpawnConfig::for_testing(1);
        config.margin = 301;
        assert!(matches!(
            config.validate(),
            Err(CoinRushError::InvalidConfig(_))
        ));

        config.margin = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_utils_rng_is_seeded() {
        let config = SpawnConfig::for_testing(12345);
        let mut a = utils::create_rng(&config);
        let mut b = utils::create_rng(&config);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
