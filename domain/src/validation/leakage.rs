//! Answer-in-question leakage rule.

use super::error::ValidationError;
use crate::text::normalize_for_contains_check;

/// Fail when the loosely normalized answer appears inside the loosely
/// normalized question.
///
/// An answer that normalizes to nothing (punctuation only) never leaks.
pub fn check_answer_not_in_question(question: &str, answer: &str) -> Result<(), ValidationError> {
    let q = normalize_for_contains_check(question);
    let a = normalize_for_contains_check(answer);

    if !a.is_empty() && q.contains(&a) {
        return Err(ValidationError::AnswerInQuestion {
            answer: answer.to_string(),
        });
    }
    Ok(())
}
