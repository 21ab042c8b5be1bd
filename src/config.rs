//! Application configuration
//!
//! Every field has a default, so a config file only needs the values it
//! wants to change:
//!
//! ```json
//! { "life": { "density": 0.3 }, "log": { "file": "gridplay.log" } }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::life::LifeConfig;
use crate::snake::SnakeConfig;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; nothing is logged without one since the TUI owns the terminal
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub life: LifeConfig,
    pub snake: SnakeConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.life.validate().context("Invalid life settings")?;
        self.snake.validate().context("Invalid snake settings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = AppConfig::from_json(
            r#"{ "life": { "density": 0.5 }, "snake": { "seed": 9 }, "log": { "file": "run.log" } }"#,
        )
        .unwrap();

        assert_eq!(config.life.density, 0.5);
        assert_eq!(config.life.tick_interval_ms, 50);
        assert_eq!(config.snake.seed, Some(9));
        assert_eq!(config.snake.initial_length, 2);
        assert_eq!(config.log.file, Some(PathBuf::from("run.log")));
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_json(r#"{ "life": { "density": 2.0 } }"#).is_err());
        assert!(AppConfig::from_json(r#"{ "snake": { "tick_interval_ms": 0 } }"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::load(Path::new("/definitely/not/here.json"));
        assert!(result.is_err());
    }
}
