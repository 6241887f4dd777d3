//! Generation configuration from TOML (`[generation]` section)

use pasalacabra_application::RepairPolicy;
use pasalacabra_application::config::repair_policy::DEFAULT_MAX_PASSES;
use pasalacabra_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model used by both the generator and the fixer
    pub model: String,
    /// Upper bound on generate/fix passes
    pub max_passes: u32,
    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: Model::DEFAULT.to_string(),
            max_passes: DEFAULT_MAX_PASSES,
            timeout_seconds: None,
        }
    }
}

impl FileGenerationConfig {
    pub fn to_policy(&self) -> RepairPolicy {
        RepairPolicy::default()
            .with_max_passes(self.max_passes)
            .with_model(Model::new(self.model.trim()))
            .with_request_timeout(self.timeout_seconds.map(Duration::from_secs))
    }
}
