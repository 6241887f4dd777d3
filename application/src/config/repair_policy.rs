//! Repair policy: loop control for daily set generation.
//!
//! These are application-layer concerns, not game rules: the same board can
//! be produced with a different pass budget or model.

use pasalacabra_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of generate/fix passes before giving up.
pub const DEFAULT_MAX_PASSES: u32 = 3;

/// Repair loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairPolicy {
    /// Upper bound on passes; each pass makes at most two external calls.
    pub max_passes: u32,
    /// Model used by both collaborators.
    pub model: Model,
    /// Per-request timeout for the HTTP adapter.
    pub request_timeout: Option<Duration>,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            model: Model::default(),
            request_timeout: None,
        }
    }
}

impl RepairPolicy {
    pub fn with_max_passes(mut self, max: u32) -> Self {
        self.max_passes = max;
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Worst-case number of collaborator calls under this policy.
    pub fn max_external_calls(&self) -> u32 {
        self.max_passes.saturating_mul(2)
    }
}
