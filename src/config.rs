//! World Configuration
//!
//! Map size, tick rate and seed. Loaded from JSON; any missing field falls
//! back to its default. A `seed_label` (e.g. a lobby name) overrides the
//! numeric seed.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::bounds::MapBounds;
use crate::core::rng::seed_from_label;
use crate::{MAP_SIZE, TICK_RATE};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid JSON for [`WorldConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Map size must be positive and finite.
    #[error("invalid map size {width} x {height}")]
    InvalidBounds {
        /// Configured width
        width: f64,
        /// Configured height
        height: f64,
    },

    /// Tick rate must be non-zero.
    #[error("tick rate must be greater than zero")]
    InvalidTickRate,
}

/// Configuration for a simulated world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Map width in map units
    pub map_width: f64,
    /// Map height in map units
    pub map_height: f64,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// RNG seed for spawn positions
    pub seed: u64,
    /// Text label hashed into the seed, used instead of `seed` when set
    pub seed_label: Option<String>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_SIZE[0],
            map_height: MAP_SIZE[1],
            tick_rate: TICK_RATE,
            seed: 0,
            seed_label: None,
        }
    }
}

impl WorldConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded world config from {}", path.display());
        Ok(config)
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.map_width) || !valid(self.map_height) {
            return Err(ConfigError::InvalidBounds {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    /// Seed the world RNG starts from.
    pub fn world_seed(&self) -> u64 {
        match &self.seed_label {
            Some(label) => seed_from_label(label),
            None => self.seed,
        }
    }

    /// Map bounds for this config.
    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.map_width, self.map_height)
    }
}
