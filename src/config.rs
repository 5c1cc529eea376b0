//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoughtsConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Side the computer plays. The minimax opponent optimizes for O.
    #[serde(default = "default_computer_player")]
    computer_player: Player,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show the minimax score of every empty cell.
    #[serde(default)]
    show_hints: bool,

    /// Ring the terminal bell when a game ends.
    #[serde(default = "default_bell")]
    bell: bool,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_computer_player() -> Player {
    Player::O
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_bell() -> bool {
    true
}

impl Default for NoughtsConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            computer_player: default_computer_player(),
            log_file: default_log_file(),
            show_hints: false,
            bell: default_bell(),
        }
    }
}

impl NoughtsConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
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

    /// Overrides the hint setting (command-line flag wins over the file).
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = self.show_hints || show_hints;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.computer_player != Player::O {
            return Err(ConfigError::new(
                "computer_player must be \"O\": the opponent always optimizes for O",
            ));
        }
        Ok(())
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
