//! Match configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a match between two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Strategy playing X.
    #[serde(default = "default_x_player")]
    x_player: PlayerKind,

    /// Strategy playing O.
    #[serde(default = "default_o_player")]
    o_player: PlayerKind,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Seed for reproducible random choices.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether to print the board after every move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_x_player() -> PlayerKind {
    PlayerKind::Human
}

fn default_o_player() -> PlayerKind {
    PlayerKind::Smart
}

fn default_games() -> u32 {
    1
}

fn default_show_board() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x_player: default_x_player(),
            o_player: default_o_player(),
            games: default_games(),
            seed: None,
            show_board: default_show_board(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x_player, o = %config.o_player, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Replaces the X strategy.
    pub fn with_x_player(mut self, kind: PlayerKind) -> Self {
        self.x_player = kind;
        self
    }

    /// Replaces the O strategy.
    pub fn with_o_player(mut self, kind: PlayerKind) -> Self {
        self.o_player = kind;
        self
    }

    /// Replaces the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the board printing flag.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    /// Seed for the X player, if the match is seeded.
    pub fn x_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for the O player, distinct from the X seed.
    pub fn o_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(1))
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
