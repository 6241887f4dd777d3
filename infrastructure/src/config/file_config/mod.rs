//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types once validated.

mod game;
mod generation;
mod output;
mod providers;

pub use game::{FileGameConfig, FileLanguage};
pub use generation::FileGenerationConfig;
pub use output::{DEFAULT_SET_PATH, FileOutputConfig};
pub use providers::{FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("generation.max_passes must be at least 1")]
    ZeroPasses,

    #[error("generation.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("game.topics cannot be empty")]
    EmptyTopics,

    #[error("game.topics_per_game is {requested} but only {available} topics are configured")]
    TooManyTopicsPerGame { requested: usize, available: usize },

    #[error("game.alphabet cannot be empty")]
    EmptyAlphabet,

    #[error("game.special_letter '{0}' is not part of game.alphabet")]
    SpecialLetterNotInAlphabet(char),

    #[error("game.set_id cannot be empty")]
    EmptySetId,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Board, calendar and topic settings
    pub game: FileGameConfig,
    /// Repair loop settings
    pub generation: FileGenerationConfig,
    /// Output location
    pub output: FileOutputConfig,
    /// Provider credentials and endpoints
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generation.max_passes == 0 {
            return Err(ConfigValidationError::ZeroPasses);
        }
        if let Some(0) = self.generation.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.generation.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.game.set_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptySetId);
        }
        if self.game.topics.is_empty() {
            return Err(ConfigValidationError::EmptyTopics);
        }
        if self.game.topics_per_game > self.game.topics.len() {
            return Err(ConfigValidationError::TooManyTopicsPerGame {
                requested: self.game.topics_per_game,
                available: self.game.topics.len(),
            });
        }

        if self.game.alphabet.is_empty() {
            return Err(ConfigValidationError::EmptyAlphabet);
        }
        let special = self.game.special_letter.to_uppercase().to_string();
        if !self
            .game
            .alphabet
            .iter()
            .any(|l| l.trim().to_uppercase() == special)
        {
            return Err(ConfigValidationError::SpecialLetterNotInAlphabet(
                self.game.special_letter,
            ));
        }

        Ok(())
    }
}
