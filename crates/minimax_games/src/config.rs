//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "minimax_games.toml";

/// Names and defaults for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name shown for the X player.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// Name shown for the O player in two-player mode.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Name of the AI player (appears in logs).
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the AI's candidate scores before each of its moves.
    #[serde(default)]
    show_scores: bool,
}

fn default_player_x_name() -> String {
    "X".to_string()
}

fn default_player_o_name() -> String {
    "O".to_string()
}

fn default_ai_name() -> String {
    "AI".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x_name: default_player_x_name(),
            player_o_name: default_player_o_name(),
            ai_name: default_ai_name(),
            log_filter: default_log_filter(),
            show_scores: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_x = %config.player_x_name, player_o = %config.player_o_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the default file if it exists.
    ///
    /// A missing default file yields the built-in defaults; an explicit path
    /// must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns a copy with score printing switched on or off.
    pub fn with_show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
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
