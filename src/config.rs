use log::warn;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::game::{SHORT_WORD_LIMIT, STARTING_HIT_POINTS};

/// Name of the optional config file, looked up beside the executable.
pub const CONFIG_FILENAME: &str = "ghost.json";
/// Name of the word list, looked up beside the executable.
pub const DEFAULT_WORD_SOURCE: &str = "words.txt";

/// Failure modes when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Game settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GameConfig {
    /// Word list filename, relative to the executable's directory.
    pub word_source: String,
    /// Hit points each player starts with.
    pub starting_hit_points: i32,
    /// Completing a word of at most this many letters doesn't lose the round.
    pub short_word_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_source: DEFAULT_WORD_SOURCE.to_owned(),
            starting_hit_points: STARTING_HIT_POINTS,
            short_word_limit: SHORT_WORD_LIMIT,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, or the defaults if there isn't one.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_source.trim().is_empty() {
            return Err(ConfigError::Validation(
                "word-source must not be empty".into(),
            ));
        }
        if self.starting_hit_points < 1 {
            return Err(ConfigError::Validation(
                "starting-hit-points must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
