//! Logging infrastructure: structured transcript logging.
//!
//! Provides [`JsonlTranscriptLogger`], a JSONL file writer that implements
//! the [`TranscriptLogger`](pasalacabra_application::TranscriptLogger) port.

mod jsonl_transcript;

pub use jsonl_transcript::JsonlTranscriptLogger;
