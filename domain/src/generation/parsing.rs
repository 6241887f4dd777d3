//! Parsing of raw model responses.
//!
//! Pure text handling: no I/O, no validation. The generator's output is
//! turned into a JSON value and the fixer's output into a [`FixerVerdict`];
//! whether either is a valid set is decided later by the validator.

use serde_json::Value;
use thiserror::Error;

/// Exact reply the fixer sends when the candidate needs no change.
pub const FIXER_OK_SENTINEL: &str = "OK";

/// Errors produced while turning model text into JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("Empty response from model")]
    Empty,

    #[error("Failed to parse response as JSON: {error}\nRaw response: {raw}")]
    InvalidJson { error: String, raw: String },
}

/// What the fixer decided about a candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum FixerVerdict {
    /// The candidate is accepted as-is
    Unchanged,
    /// A complete replacement set, still untrusted
    Replacement(Value),
}

/// Strip a surrounding Markdown code fence, if any.
///
/// Models are told to answer with bare JSON but sometimes wrap it in
/// ```` ```json ```` fences anyway.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

/// Parse the generator's response into a JSON value.
pub fn parse_candidate(text: &str) -> Result<Value, ResponseParseError> {
    let payload = strip_code_fence(text);
    if payload.is_empty() {
        return Err(ResponseParseError::Empty);
    }
    serde_json::from_str(payload).map_err(|e| ResponseParseError::InvalidJson {
        error: e.to_string(),
        raw: text.to_string(),
    })
}

/// Parse the fixer's response: the `OK` sentinel or a replacement set.
pub fn parse_fixer_response(text: &str) -> Result<FixerVerdict, ResponseParseError> {
    if text.trim() == FIXER_OK_SENTINEL {
        return Ok(FixerVerdict::Unchanged);
    }
    parse_candidate(text).map(FixerVerdict::Replacement)
}
