//! Immutable rule configuration shared by the validator and the prompts.

use super::alphabet::Alphabet;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identity every published set must carry.
pub const DEFAULT_SET_ID: &str = "set_01";

/// The two question prefixes, without the letter and colon.
///
/// A question reads `"<starts_with> X: ..."` or `"<contains> X: ..."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTemplates {
    pub starts_with: String,
    pub contains: String,
}

impl PrefixTemplates {
    pub fn new(
        starts_with: impl Into<String>,
        contains: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let starts_with = starts_with.into().trim().to_string();
        let contains = contains.into().trim().to_string();
        if starts_with.is_empty() || contains.is_empty() {
            return Err(DomainError::EmptyPrefix);
        }
        Ok(Self {
            starts_with,
            contains,
        })
    }

    /// `Empieza por X:` / `Contiene la X:`
    pub fn spanish() -> Self {
        Self {
            starts_with: "Empieza por".to_string(),
            contains: "Contiene la".to_string(),
        }
    }

    /// `Starts with X:` / `Contains the X:`
    pub fn english() -> Self {
        Self {
            starts_with: "Starts with".to_string(),
            contains: "Contains the".to_string(),
        }
    }

    /// Render the starts-with prefix for a letter, e.g. `Empieza por A:`.
    pub fn render_starts_with(&self, letter: &str) -> String {
        format!("{} {}:", self.starts_with, letter)
    }

    /// Render the contains prefix for a letter, e.g. `Contiene la Ñ:`.
    pub fn render_contains(&self, letter: &str) -> String {
        format!("{} {}:", self.contains, letter)
    }
}

impl Default for PrefixTemplates {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Everything the rule validator needs to know about a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Identity constant expected in `id`
    pub set_id: String,
    /// Ordered letter board
    pub alphabet: Alphabet,
    /// Recognized question prefixes
    pub prefixes: PrefixTemplates,
}

impl GameRules {
    pub fn new(set_id: impl Into<String>, alphabet: Alphabet, prefixes: PrefixTemplates) -> Self {
        Self {
            set_id: set_id.into(),
            alphabet,
            prefixes,
        }
    }

    /// Expected number of entries in a set
    pub fn question_count(&self) -> usize {
        self.alphabet.len()
    }
}

impl Default for GameRules {
    /// The Spanish board with the `set_01` identity.
    fn default() -> Self {
        Self::new(DEFAULT_SET_ID, Alphabet::spanish(), PrefixTemplates::spanish())
    }
}
