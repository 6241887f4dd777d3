//! Domain error types

use thiserror::Error;

/// Errors raised while building game rules.
///
/// These describe a broken configuration, not a broken question set; see
/// [`ValidationError`](crate::validation::ValidationError) for the latter.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Alphabet cannot be empty")]
    EmptyAlphabet,

    #[error("Alphabet contains an empty letter at position {0}")]
    EmptyLetter(usize),

    #[error("Alphabet contains duplicate letter: {0}")]
    DuplicateLetter(String),

    #[error("Special letter {0} is not part of the alphabet")]
    SpecialLetterNotInAlphabet(char),

    #[error("Question prefix template cannot be empty")]
    EmptyPrefix,

    #[error("Invalid question prefix pattern: {0}")]
    InvalidPrefixPattern(#[from] regex::Error),

    #[error("Cannot pick {requested} topics from a pool of {available}")]
    NotEnoughTopics { requested: usize, available: usize },
}
