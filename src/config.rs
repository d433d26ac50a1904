//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then
//! command-line overrides. The merged result is validated once.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::MIN_TICK_INTERVAL_MS;

/// Widest board cell the renderer supports, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Piece sequence seed; taken from the clock when unset.
    pub seed: Option<u32>,
    /// Lower bound for the gravity interval.
    pub min_tick_interval_ms: u32,
    /// Terminal columns per board cell.
    pub cell_width: u16,
    /// Destination for log output. No file, no logging.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Ask before quitting on `Q`/`Esc`.
    pub confirm_quit: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            cell_width: 2,
            log_file: None,
            log_level: "warn".to_string(),
            confirm_quit: true,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub seed: Option<u32>,
    pub min_tick_interval_ms: Option<u32>,
    pub cell_width: Option<u16>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_confirm_quit: bool,
}

impl GameConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, then `file` if given, then `overrides`; validated.
    pub fn resolve(file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(ms) = overrides.min_tick_interval_ms {
            self.min_tick_interval_ms = ms;
        }
        if let Some(w) = overrides.cell_width {
            self.cell_width = w;
        }
        if let Some(path) = &overrides.log_file {
            self.log_file = Some(path.clone());
        }
        if let Some(level) = &overrides.log_level {
            self.log_level = level.clone();
        }
        if overrides.no_confirm_quit {
            self.confirm_quit = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "min_tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.cell_width == 0 || self.cell_width > MAX_CELL_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "cell_width must be between 1 and {MAX_CELL_WIDTH}, got {}",
                self.cell_width
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}
