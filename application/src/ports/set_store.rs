//! Persistence port for published sets.

use pasalacabra_domain::QuestionSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a set
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize set: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where validated sets are written.
///
/// Only fully validated sets reach this port; implementations must not
/// leave a partial artifact behind when a write fails.
pub trait SetStore: Send + Sync {
    /// Persist the set, returning a human-readable location.
    fn save(&self, set: &QuestionSet) -> Result<String, StoreError>;
}
