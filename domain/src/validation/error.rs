//! Validation failures.
//!
//! Every rule raises exactly one of these on the first violation it finds.
//! [`ValidationError::kind`] groups the variants into the four families the
//! repair loop and the CLI report on.

use thiserror::Error;

/// Family of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shape of the set: identity, title, count, letter order, field types
    Schema,
    /// Prefix and letter rules of a single entry
    LetterConstraint,
    /// The answer appears inside its own question
    Leakage,
    /// Two entries share an answer
    DuplicateAnswer,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Schema => "schema",
            ErrorKind::LetterConstraint => "letter_constraint",
            ErrorKind::Leakage => "leakage",
            ErrorKind::DuplicateAnswer => "duplicate_answer",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated question-set invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ==================== Schema ====================
    #[error("Expected id '{expected}', got {found}")]
    WrongId { expected: String, found: String },

    #[error("Missing/invalid title")]
    InvalidTitle,

    #[error("Expected questions to be an array of length {expected}, got {found}")]
    WrongQuestionCount { expected: usize, found: String },

    #[error("Letters mismatch. Expected [{expected}], got [{found}]")]
    LetterSequenceMismatch { expected: String, found: String },

    #[error("Invalid entry at position {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    // ==================== Letter constraint ====================
    #[error("Empty question/answer")]
    EmptyField,

    #[error("Question must start with '{starts_with} X:' or '{contains} X:'. Got: {question}")]
    MissingPrefix {
        starts_with: String,
        contains: String,
        question: String,
    },

    #[error("Question letter mismatch. Expected {expected}, got {found}. Question: {question}")]
    LetterMismatch {
        expected: String,
        found: String,
        question: String,
    },

    #[error("Answer must start with {letter}. Got: {answer}")]
    AnswerMustStartWith { letter: String, answer: String },

    #[error("Answer must contain {letter}. Got: {answer}")]
    AnswerMustContain { letter: String, answer: String },

    // ==================== Leakage ====================
    #[error("Answer must not be contained in the question. Answer: {answer}")]
    AnswerInQuestion { answer: String },

    // ==================== Duplicates ====================
    #[error("Duplicate answer detected: {answer}")]
    DuplicateAnswer { answer: String },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::WrongId { .. }
            | ValidationError::InvalidTitle
            | ValidationError::WrongQuestionCount { .. }
            | ValidationError::LetterSequenceMismatch { .. }
            | ValidationError::InvalidEntry { .. } => ErrorKind::Schema,
            ValidationError::EmptyField
            | ValidationError::MissingPrefix { .. }
            | ValidationError::LetterMismatch { .. }
            | ValidationError::AnswerMustStartWith { .. }
            | ValidationError::AnswerMustContain { .. } => ErrorKind::LetterConstraint,
            ValidationError::AnswerInQuestion { .. } => ErrorKind::Leakage,
            ValidationError::DuplicateAnswer { .. } => ErrorKind::DuplicateAnswer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_grouping() {
        assert_eq!(ValidationError::InvalidTitle.kind(), ErrorKind::Schema);
        assert_eq!(ValidationError::EmptyField.kind(), ErrorKind::LetterConstraint);
        assert_eq!(
            ValidationError::AnswerInQuestion {
                answer: "Roma".into()
            }
            .kind(),
            ErrorKind::Leakage
        );
        assert_eq!(
            ValidationError::DuplicateAnswer {
                answer: "Roma".into()
            }
            .kind(),
            ErrorKind::DuplicateAnswer
        );
    }

    #[test]
    fn test_display_is_descriptive() {
        let err = ValidationError::LetterMismatch {
            expected: "A".into(),
            found: "B".into(),
            question: "Empieza por B: Capital de Alemania".into(),
        };
        assert_eq!(
            err.to_string(),
            "Question letter mismatch. Expected A, got B. Question: Empieza por B: Capital de Alemania"
        );
        assert_eq!(ErrorKind::DuplicateAnswer.to_string(), "duplicate_answer");
    }
}
