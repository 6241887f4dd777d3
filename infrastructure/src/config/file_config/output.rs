//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the published set, relative to the working directory
pub const DEFAULT_SET_PATH: &str = "src/data/sets/set_01.json";

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Where the validated set is written
    pub set_path: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            set_path: PathBuf::from(DEFAULT_SET_PATH),
        }
    }
}
