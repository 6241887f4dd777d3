//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording what was sent to and
//! received from the collaborators during a run (prompts, raw responses,
//! validation failures, fixer verdicts).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the full exchange in
//! a machine-readable format (JSONL).

use serde_json::Value;

/// A structured transcript event.
///
/// The adapter adds the timestamp when the event is written.
pub struct TranscriptEvent {
    /// Event type identifier (e.g., "prompt", "response", "set_accepted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; write failures are swallowed by the
/// adapter so they never abort a run.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn log(&self, _event: TranscriptEvent) {}
}
