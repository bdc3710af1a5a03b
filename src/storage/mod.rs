//! Snapshot persistence.
//!
//! The pipeline's only durable output is one JSON snapshot file,
//! replaced wholesale at the end of a successful run. The write goes
//! through a temp file and a rename so a reader never observes a
//! partially written snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::ChampionRecord;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the champion snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    path: PathBuf,
}

impl SnapshotWriter {
    /// Create a writer targeting the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write all records as a pretty-printed JSON array, replacing any
    /// previous snapshot.
    pub fn write(&self, records: &[ChampionRecord]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let json = serde_json::to_string_pretty(records)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        info!("Wrote {} records to {:?}", records.len(), self.path);
        Ok(records.len())
    }
}

impl Default for SnapshotWriter {
    fn default() -> Self {
        Self::new(PathBuf::from("./public/champions.json"))
    }
}
