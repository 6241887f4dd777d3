//! Game configuration from TOML (`[game]` section)

use chrono::NaiveDate;
use pasalacabra_domain::game::{
    DEFAULT_SET_ID, DEFAULT_TOPICS, DEFAULT_TOPICS_PER_GAME, default_start_date,
};
use pasalacabra_domain::{Alphabet, DomainError, GameRules, PrefixTemplates};
use serde::{Deserialize, Serialize};

/// Language of the question prefixes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileLanguage {
    #[default]
    Es,
    En,
}

impl FileLanguage {
    pub fn prefixes(&self) -> PrefixTemplates {
        match self {
            FileLanguage::Es => PrefixTemplates::spanish(),
            FileLanguage::En => PrefixTemplates::english(),
        }
    }
}

/// Raw game configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Identifier every published set must carry
    pub set_id: String,
    /// Date of game No. 1
    pub start_date: NaiveDate,
    /// Topic pool sampled for each round
    pub topics: Vec<String>,
    /// How many topics a round uses
    pub topics_per_game: usize,
    /// Board letters in play order
    pub alphabet: Vec<String>,
    /// Letter kept distinct from its unaccented base
    pub special_letter: char,
    /// Prefix language
    pub language: FileLanguage,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            set_id: DEFAULT_SET_ID.to_string(),
            start_date: default_start_date(),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            topics_per_game: DEFAULT_TOPICS_PER_GAME,
            alphabet: Alphabet::SPANISH.iter().map(|l| l.to_string()).collect(),
            special_letter: 'Ñ',
            language: FileLanguage::Es,
        }
    }
}

impl FileGameConfig {
    /// Build the immutable rule set handed to the validator
    pub fn to_rules(&self) -> Result<GameRules, DomainError> {
        let alphabet = Alphabet::new(&self.alphabet, self.special_letter)?;
        Ok(GameRules::new(
            self.set_id.clone(),
            alphabet,
            self.language.prefixes(),
        ))
    }
}
