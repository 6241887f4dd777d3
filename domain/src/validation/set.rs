//! Whole-set validation.

use super::error::ValidationError;
use super::leakage::check_answer_not_in_question;
use super::letter::{PrefixMatcher, check_letter_constraint};
use crate::core::error::DomainError;
use crate::game::question_set::{QuestionEntry, QuestionSet};
use crate::game::rules::GameRules;
use crate::text::normalize_for_letter_check;
use serde_json::Value;
use std::collections::HashSet;

/// Validates untrusted collaborator output against the game rules.
///
/// Validation is fail-fast: the first violated invariant is returned and
/// nothing after it is inspected. Checks run in this order:
///
/// 1. `id` equals the configured identity
/// 2. `title` is a non-blank string
/// 3. `questions` is an array with one entry per alphabet letter
/// 4. the `letter` sequence equals the alphabet, position by position
/// 5. per entry, in board order: string fields, duplicate answer, letter
///    rule, leakage rule
#[derive(Debug, Clone)]
pub struct SetValidator {
    rules: GameRules,
    matcher: PrefixMatcher,
}

impl SetValidator {
    pub fn new(rules: GameRules) -> Result<Self, DomainError> {
        let matcher = PrefixMatcher::new(&rules.prefixes)?;
        Ok(Self { rules, matcher })
    }

    /// Prefix and letter rule for a single entry.
    pub fn check_letter_constraint(
        &self,
        letter: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), ValidationError> {
        check_letter_constraint(
            &self.matcher,
            self.rules.alphabet.special(),
            letter,
            question,
            answer,
        )
    }

    /// Leakage rule for a single entry.
    pub fn check_answer_not_in_question(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<(), ValidationError> {
        check_answer_not_in_question(question, answer)
    }

    /// Validate a raw candidate and return the typed set.
    pub fn validate_set(&self, value: &Value) -> Result<QuestionSet, ValidationError> {
        let id = match value.get("id").and_then(Value::as_str) {
            Some(id) if id == self.rules.set_id => id,
            _ => {
                return Err(ValidationError::WrongId {
                    expected: self.rules.set_id.clone(),
                    found: describe(value.get("id")),
                });
            }
        };

        let title = match value.get("title").and_then(Value::as_str) {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(ValidationError::InvalidTitle),
        };

        let expected_len = self.rules.question_count();
        let questions = match value.get("questions").and_then(Value::as_array) {
            Some(questions) if questions.len() == expected_len => questions,
            Some(questions) => {
                return Err(ValidationError::WrongQuestionCount {
                    expected: expected_len,
                    found: format!("{} entries", questions.len()),
                });
            }
            None => {
                return Err(ValidationError::WrongQuestionCount {
                    expected: expected_len,
                    found: describe(value.get("questions")),
                });
            }
        };

        let letters: Vec<Option<&str>> = questions
            .iter()
            .map(|q| q.get("letter").and_then(Value::as_str))
            .collect();
        let in_order = letters
            .iter()
            .zip(self.rules.alphabet.letters())
            .all(|(got, want)| *got == Some(want.as_str()));
        if !in_order {
            return Err(ValidationError::LetterSequenceMismatch {
                expected: self.rules.alphabet.joined(),
                found: letters
                    .iter()
                    .map(|l| l.unwrap_or("null"))
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        let special = self.rules.alphabet.special();
        let mut seen_answers = HashSet::new();
        let mut entries = Vec::with_capacity(questions.len());

        for (index, raw) in questions.iter().enumerate() {
            let entry = parse_entry(index, raw)?;

            let key = normalize_for_letter_check(&entry.answer, special).to_lowercase();
            if !seen_answers.insert(key) {
                return Err(ValidationError::DuplicateAnswer {
                    answer: entry.answer,
                });
            }

            self.check_letter_constraint(&entry.letter, &entry.question, &entry.answer)?;
            self.check_answer_not_in_question(&entry.question, &entry.answer)?;

            entries.push(entry);
        }

        Ok(QuestionSet {
            id: id.to_string(),
            title: title.to_string(),
            questions: entries,
        })
    }
}

fn parse_entry(index: usize, raw: &Value) -> Result<QuestionEntry, ValidationError> {
    if !raw.is_object() {
        return Err(ValidationError::InvalidEntry {
            index,
            reason: "each question entry must be an object".to_string(),
        });
    }

    let field = |name: &str| raw.get(name).and_then(Value::as_str);
    match (field("letter"), field("question"), field("answer")) {
        (Some(letter), Some(question), Some(answer)) => {
            Ok(QuestionEntry::new(letter, question, answer))
        }
        _ => Err(ValidationError::InvalidEntry {
            index,
            reason: "each entry must have string letter/question/answer".to_string(),
        }),
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(v) => v.to_string(),
    }
}
