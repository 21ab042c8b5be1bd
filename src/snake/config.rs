use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for the snake game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Length of the snake at the start of a session
    pub initial_length: u32,
    /// Milliseconds between moves
    pub tick_interval_ms: u64,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            initial_length: 2,
            tick_interval_ms: 100,
            seed: None,
        }
    }
}

impl SnakeConfig {
    /// Create a reproducible configuration with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.initial_length == 0 {
            return Err(EngineError::InvalidLength);
        }
        if self.tick_interval_ms == 0 {
            return Err(EngineError::ZeroTickInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnakeConfig::default();
        assert_eq!(config.initial_length, 2);
        assert_eq!(config.tick_interval_ms, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = SnakeConfig {
            initial_length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(EngineError::InvalidLength));
    }
}
