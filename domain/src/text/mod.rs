//! Text normalization helpers shared by the validation rules.

pub mod normalize;

pub use normalize::{normalize_for_contains_check, normalize_for_letter_check, strip_accents};
