//! Game configuration.

use crate::controller::GameMode;
use crate::types::Mark;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a new game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Mark played by the human. In player-vs-AI mode the AI takes the
    /// opposing mark.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Optional seed for the AI's opening randomness; omit for
    /// entropy-seeded play.
    #[serde(default)]
    ai_seed: Option<u64>,
}

fn default_mode() -> GameMode {
    GameMode::PlayerVsAi
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl GameConfig {
    /// Creates a configuration with no AI seed.
    pub fn new(mode: GameMode, human_mark: Mark) -> Self {
        Self {
            mode,
            human_mark,
            ai_seed: None,
        }
    }

    /// Sets a fixed AI seed for reproducible play.
    pub fn with_ai_seed(mut self, seed: u64) -> Self {
        self.ai_seed = Some(seed);
        self
    }

    /// Loads a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;

        info!(mode = ?config.mode, "config loaded");
        Ok(config)
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the human's mark.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Returns the AI seed, if set.
    pub fn ai_seed(&self) -> Option<u64> {
        self.ai_seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_mode(), default_human_mark())
    }
}

/// Configuration error.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    /// The config file could not be read.
    #[display("failed to read config file: {_0}")]
    Io(std::io::Error),
    /// The config file is not valid TOML for this schema.
    #[display("failed to parse config: {_0}")]
    Parse(toml::de::Error),
}
