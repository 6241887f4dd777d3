//! Typed question set, produced only by a successful validation.

use serde::{Deserialize, Serialize};

/// One clue on the board.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub letter: String,
    pub question: String,
    pub answer: String,
}

impl QuestionEntry {
    pub fn new(
        letter: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            letter: letter.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A full daily round: one entry per alphabet letter, in board order.
///
/// Instances are obtained from
/// [`SetValidator::validate_set`](crate::validation::SetValidator::validate_set);
/// collaborators only ever hand over raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuestionEntry>,
}

impl QuestionSet {
    /// Render the persisted form: two-space indented JSON with a trailing
    /// newline. Non-ASCII characters are written verbatim.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}
