//! Model response handling for the generator and the fixer.

pub mod parsing;

pub use parsing::{
    FIXER_OK_SENTINEL, FixerVerdict, ResponseParseError, parse_candidate, parse_fixer_response,
    strip_code_fence,
};
