use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for the Game of Life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Probability that an interior cell is born when the grid is seeded
    pub density: f64,
    /// Milliseconds between generations
    pub tick_interval_ms: u64,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            density: 0.2,
            tick_interval_ms: 50,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Create a reproducible configuration with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(EngineError::InvalidDensity(self.density));
        }
        if self.tick_interval_ms == 0 {
            return Err(EngineError::ZeroTickInterval);
        }
        Ok(())
    }
}
