//! Player configuration for the console driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_FIRST_PLAYER, DEFAULT_SECOND_PLAYER, GameEngine};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file to use when `--config` is absent.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// Names of the two players.
///
/// ```toml
/// player_one = "Alice"
/// player_two = "Bob"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player who moves first (places X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the player who moves second (places O).
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    DEFAULT_FIRST_PLAYER.to_string()
}

fn default_player_two() -> String {
    DEFAULT_SECOND_PLAYER.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with explicit player names.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Picks the config source: explicit path, then `NOUGHTS_CONFIG`, then defaults.
    #[instrument]
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_with(path, std::env::var_os(CONFIG_ENV))
    }

    /// Same as [`GameConfig::resolve`], with the `NOUGHTS_CONFIG` value passed in.
    ///
    /// An empty `env_path` counts as unset.
    #[instrument]
    pub fn resolve_with(
        path: Option<&Path>,
        env_path: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match env_path {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => {
                debug!("No config file, using default player names");
                Ok(Self::default())
            }
        }
    }

    /// Replaces player names with any given on the command line.
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
    }

    /// Creates a fresh game between the configured players.
    pub fn new_game(&self) -> GameEngine {
        GameEngine::new(self.player_one.clone(), self.player_two.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
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
