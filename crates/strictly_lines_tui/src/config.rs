//! TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_lines::{GAME_SIZE, Rules, WIN_SIZE};
use tracing::{debug, info, instrument};

/// Top-level configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board dimensions.
    board: BoardConfig,
    /// Log output.
    logging: LoggingConfig,
}

/// Board dimensions, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board edge length.
    size: usize,
    /// Marks in a row needed to win.
    win_size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: GAME_SIZE,
            win_size: WIN_SIZE,
        }
    }
}

/// Where logs go. The terminal is busy drawing the board, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path.
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("strictly_lines.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.rules()?;
        info!(size = config.board.size, win_size = config.board.win_size, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides for the board dimensions.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, size: Option<usize>, win_size: Option<usize>) -> Self {
        if let Some(size) = size {
            self.board.size = size;
        }
        if let Some(win_size) = win_size {
            self.board.win_size = win_size;
        }
        self
    }

    /// Validates the board section and converts it into engine rules.
    #[track_caller]
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Rules::new(self.board.size, self.board.win_size)
            .map_err(|e| ConfigError::new(format!("Invalid board: {}", e.message)))
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
