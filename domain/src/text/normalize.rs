//! Unicode normalization used by the validation rules.
//!
//! Two flavours exist because the rules need two different notions of
//! "the same text":
//!
//! | Function | Used by | Special letter | Case | Punctuation |
//! |----------|---------|----------------|------|-------------|
//! | [`normalize_for_letter_check`] | letter rules, duplicate keys | kept, uppercased | kept | kept |
//! | [`normalize_for_contains_check`] | answer-in-question leakage | folded to base | lowered | collapsed to spaces |

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Decompose to NFD and drop every combining mark.
pub fn strip_accents(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Strict normalization for letter checks.
///
/// The designated `special` letter (either case, composed or decomposed)
/// comes out as its uppercase form; every other character loses its
/// diacritics. Leading and trailing whitespace is removed.
///
/// ```
/// use pasalacabra_domain::text::normalize_for_letter_check;
///
/// assert_eq!(normalize_for_letter_check("  Mañana ", 'Ñ'), "MaÑana");
/// assert_eq!(normalize_for_letter_check("Águila", 'Ñ'), "Aguila");
/// ```
pub fn normalize_for_letter_check(s: &str, special: char) -> String {
    let special = upper_char(special);
    let mut out = String::with_capacity(s.len());

    for c in s.trim().nfc() {
        if upper_char(c) == special {
            out.push(special);
        } else {
            decompose_canonical(c, |d| {
                if !is_combining_mark(d) {
                    out.push(d);
                }
            });
        }
    }

    // A stripped mark in front of whitespace would otherwise leave it exposed.
    out.trim().to_string()
}

/// Loose normalization for containment checks.
///
/// Lowercases, strips every diacritic (the special letter included, so
/// `ñ` compares equal to `n`), turns anything that is not a word character
/// or whitespace into a space and collapses whitespace runs.
///
/// ```
/// use pasalacabra_domain::text::normalize_for_contains_check;
///
/// assert_eq!(normalize_for_contains_check("Córdoba!"), "cordoba");
/// assert_eq!(normalize_for_contains_check("  El   año-nuevo "), "el ano nuevo");
/// ```
pub fn normalize_for_contains_check(s: &str) -> String {
    let folded: String = strip_accents(&s.to_lowercase())
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase a single character, keeping it as-is when the mapping expands.
pub(crate) fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
