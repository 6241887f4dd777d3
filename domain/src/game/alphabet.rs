//! The ordered letter board of a round.

use crate::core::error::DomainError;
use crate::text::normalize::upper_char;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered letters of the board plus the designated special letter.
///
/// Letters are stored uppercased. A letter is usually one character but
/// digraphs (`"CH"`, `"LL"`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    letters: Vec<String>,
    special: char,
}

impl Alphabet {
    /// Letters of the Spanish board (no K, no W).
    pub const SPANISH: [&'static str; 25] = [
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "L", "M", "N", "Ñ", "O", "P", "Q", "R",
        "S", "T", "U", "V", "X", "Y", "Z",
    ];

    /// Build an alphabet, rejecting empty, duplicated or inconsistent boards.
    pub fn new<I, S>(letters: I, special: char) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let letters: Vec<String> = letters
            .into_iter()
            .map(|l| l.as_ref().trim().to_uppercase())
            .collect();

        if letters.is_empty() {
            return Err(DomainError::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        for (i, letter) in letters.iter().enumerate() {
            if letter.is_empty() {
                return Err(DomainError::EmptyLetter(i));
            }
            if !seen.insert(letter.as_str()) {
                return Err(DomainError::DuplicateLetter(letter.clone()));
            }
        }

        let special = upper_char(special);
        if !seen.contains(special.to_string().as_str()) {
            return Err(DomainError::SpecialLetterNotInAlphabet(special));
        }

        Ok(Self { letters, special })
    }

    /// The 25-letter Spanish board with `Ñ` as the special letter.
    pub fn spanish() -> Self {
        Self {
            letters: Self::SPANISH.iter().map(|l| l.to_string()).collect(),
            special: 'Ñ',
        }
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// The letter kept distinct during strict normalization.
    pub fn special(&self) -> char {
        self.special
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Comma-separated letters, as shown in prompts.
    pub fn joined(&self) -> String {
        self.letters.join(", ")
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::spanish()
    }
}
