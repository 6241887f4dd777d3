//! Deterministic validation rules for question sets.
//!
//! | Rule | Function | Error kind |
//! |------|----------|------------|
//! | Prefix and letter | [`check_letter_constraint`] | [`ErrorKind::LetterConstraint`] |
//! | Answer not in question | [`check_answer_not_in_question`] | [`ErrorKind::Leakage`] |
//! | Whole set | [`SetValidator::validate_set`] | any |

pub mod error;
pub mod leakage;
pub mod letter;
pub mod set;

pub use error::{ErrorKind, ValidationError};
pub use leakage::check_answer_not_in_question;
pub use letter::{PrefixKind, PrefixMatch, PrefixMatcher, check_letter_constraint};
pub use set::SetValidator;
