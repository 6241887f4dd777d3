//! Prefix parsing and the per-entry letter rule.

use super::error::ValidationError;
use crate::core::error::DomainError;
use crate::game::rules::PrefixTemplates;
use crate::text::normalize_for_letter_check;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Which of the two prefix templates a question uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixKind {
    /// The answer must begin with the letter
    StartsWith,
    /// The answer must contain the letter somewhere
    Contains,
}

/// Result of parsing a question prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch {
    pub kind: PrefixKind,
    /// Letter argument, uppercased
    pub letter: String,
}

/// Compiled matcher for the two question prefixes.
///
/// Matching is case-insensitive, tolerates leading whitespace and any run of
/// whitespace between template words, and binds a one or two letter token
/// immediately followed by a colon.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    pattern: Regex,
    templates: PrefixTemplates,
}

impl PrefixMatcher {
    pub fn new(templates: &PrefixTemplates) -> Result<Self, DomainError> {
        if templates.starts_with.trim().is_empty() || templates.contains.trim().is_empty() {
            return Err(DomainError::EmptyPrefix);
        }

        let pattern = format!(
            r"(?i)^\s*(?:(?P<starts>{})|(?P<contains>{}))\s+(?P<letter>\p{{L}}{{1,2}})\s*:",
            template_pattern(&templates.starts_with),
            template_pattern(&templates.contains),
        );

        Ok(Self {
            pattern: Regex::new(&pattern)?,
            templates: templates.clone(),
        })
    }

    /// Parse the prefix of `question`, if it has one.
    pub fn parse(&self, question: &str) -> Option<PrefixMatch> {
        let question: String = question.nfc().collect();
        let caps = self.pattern.captures(&question)?;

        let kind = if caps.name("starts").is_some() {
            PrefixKind::StartsWith
        } else {
            PrefixKind::Contains
        };

        Some(PrefixMatch {
            kind,
            letter: caps.name("letter")?.as_str().to_uppercase(),
        })
    }
}

fn template_pattern(template: &str) -> String {
    template
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Check the prefix and letter rules of a single entry.
///
/// Steps, failing on the first violation:
/// 1. question and answer must be non-blank
/// 2. the question must use one of the two prefixes
/// 3. the prefix letter must be `letter`
/// 4. the strictly normalized answer must start with (or contain) `letter`
pub fn check_letter_constraint(
    matcher: &PrefixMatcher,
    special: char,
    letter: &str,
    question: &str,
    answer: &str,
) -> Result<(), ValidationError> {
    let q = question.trim();
    let a = answer.trim();
    if q.is_empty() || a.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let Some(prefix) = matcher.parse(q) else {
        return Err(ValidationError::MissingPrefix {
            starts_with: matcher.templates.starts_with.clone(),
            contains: matcher.templates.contains.clone(),
            question: q.to_string(),
        });
    };

    let expected = letter.trim().to_uppercase();
    if prefix.letter != expected {
        return Err(ValidationError::LetterMismatch {
            expected,
            found: prefix.letter,
            question: q.to_string(),
        });
    }

    let normalized = normalize_for_letter_check(a, special).to_uppercase();
    match prefix.kind {
        PrefixKind::StartsWith if !normalized.starts_with(&expected) => {
            Err(ValidationError::AnswerMustStartWith {
                letter: expected,
                answer: answer.to_string(),
            })
        }
        PrefixKind::Contains if !normalized.contains(&expected) => {
            Err(ValidationError::AnswerMustContain {
                letter: expected,
                answer: answer.to_string(),
            })
        }
        _ => Ok(()),
    }
}
