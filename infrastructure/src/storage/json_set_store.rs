//! JSON file store for published sets.
//!
//! The set is serialized as pretty JSON with a trailing newline, written to
//! a sibling temp file and renamed into place, so readers never observe a
//! half-written artifact.

use pasalacabra_application::{SetStore, StoreError};
use pasalacabra_domain::QuestionSet;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes sets to a fixed path.
pub struct JsonSetStore {
    path: PathBuf,
}

impl JsonSetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read an existing file as raw JSON, for offline checking.
    pub fn read_value(path: &Path) -> Result<Value, StoreError> {
        let text = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SetStore for JsonSetStore {
    fn save(&self, set: &QuestionSet) -> Result<String, StoreError> {
        let json = set.to_pretty_json()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        let written = fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&temp, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(self.path.display().to_string())
    }
}
