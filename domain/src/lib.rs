//! Domain layer for pasalacabra
//!
//! This crate contains the question-set model and the deterministic rules
//! that decide whether a machine-generated set may be published. It has no
//! I/O and no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question set
//!
//! A daily round is one clue per board letter. Each clue either starts with
//! its letter (`Empieza por A:`) or contains it (`Contiene la Ñ:`).
//!
//! ## Validation
//!
//! - **Strict normalization** keeps the special letter (`Ñ`) distinct and
//!   strips every other diacritic; used for letter and duplicate checks.
//! - **Loose normalization** folds case, accents and punctuation; used to
//!   make sure an answer never appears inside its own question.
//! - [`SetValidator`] runs every rule fail-fast and yields a typed
//!   [`QuestionSet`] on success.

pub mod core;
pub mod game;
pub mod generation;
pub mod prompt;
pub mod text;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{error::DomainError, model::Model, string::truncate};
pub use game::{
    Alphabet, GameContext, GameRules, PrefixTemplates, QuestionEntry, QuestionSet,
    game_number_for, pick_topics,
};
pub use generation::{FixerVerdict, ResponseParseError, parse_candidate, parse_fixer_response};
pub use prompt::PromptTemplate;
pub use text::{normalize_for_contains_check, normalize_for_letter_check};
pub use validation::{
    ErrorKind, SetValidator, ValidationError, check_answer_not_in_question,
    check_letter_constraint,
};
