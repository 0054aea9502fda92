//! Game configuration loaded from TOML and command-line overrides.

use crate::games::tictactoe::{DEFAULT_SIZE, GameError, Position, Symbol, TicTacToeGame};
use crate::players::{InteractiveStrategy, PlayerStrategy, ScriptedStrategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How one side of the board is played.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Name shown in prompts and logs. Left out of a config file, it
    /// becomes `Player X` or `Player O` depending on the side.
    #[serde(default)]
    name: String,

    /// Fixed moves to replay. Absent means the player types moves.
    #[serde(default)]
    script: Option<Vec<Position>>,
}

impl PlayerConfig {
    /// Creates an interactive player entry.
    pub fn interactive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: None,
        }
    }

    /// Creates a scripted player entry.
    pub fn scripted(name: impl Into<String>, moves: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            script: Some(moves),
        }
    }

    /// Builds the strategy this entry describes.
    #[instrument(skip(self), fields(player = %self.name, scripted = self.script.is_some()))]
    pub fn strategy(&self) -> Box<dyn PlayerStrategy> {
        match &self.script {
            Some(moves) => Box::new(ScriptedStrategy::new(self.name.clone(), moves.clone())),
            None => Box::new(InteractiveStrategy::stdio(self.name.clone())),
        }
    }
}

/// Complete game setup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows.
    #[serde(default = "default_size")]
    rows: usize,

    /// Board columns.
    #[serde(default = "default_size")]
    cols: usize,

    /// Player holding X.
    #[serde(default = "default_first")]
    first: PlayerConfig,

    /// Player holding O.
    #[serde(default = "default_second")]
    second: PlayerConfig,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_first() -> PlayerConfig {
    PlayerConfig::interactive("Player X")
}

fn default_second() -> PlayerConfig {
    PlayerConfig::interactive("Player O")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_size(),
            cols: default_size(),
            first: default_first(),
            second: default_second(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.fill_default_names();

        config
            .validate()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Rejects zero board dimensions and cell counts that overflow `usize`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn fill_default_names(&mut self) {
        for (player, fallback) in [
            (&mut self.first, default_first()),
            (&mut self.second, default_second()),
        ] {
            if player.name.is_empty() {
                debug!(name = %fallback.name, "Using default player name");
                player.name = fallback.name;
            }
        }
    }

    /// Replaces whichever dimensions are given.
    pub fn override_dimensions(&mut self, rows: Option<usize>, cols: Option<usize>) {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(cols) = cols {
            self.cols = cols;
        }
    }

    /// Makes the player holding `symbol` replay `moves`.
    pub fn override_script(&mut self, symbol: Symbol, moves: Vec<Position>) {
        let player = match symbol {
            Symbol::X => &mut self.first,
            Symbol::O => &mut self.second,
        };
        player.script = Some(moves);
    }

    /// Builds a ready-to-play game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] for a zero dimension.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn build_game(&self) -> Result<TicTacToeGame, GameError> {
        TicTacToeGame::with_dimensions(
            self.first.strategy(),
            self.second.strategy(),
            self.rows,
            self.cols,
        )
    }
}

/// Parses a whitespace-separated list of `row,col` pairs.
///
/// # Errors
///
/// Returns [`GameError::MalformedInput`] for the first pair that fails.
#[instrument]
pub fn parse_script(s: &str) -> Result<Vec<Position>, GameError> {
    s.split_whitespace().map(str::parse).collect()
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
