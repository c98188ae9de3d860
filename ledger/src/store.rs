//! Snapshot persistence — whole-document JSON rewrite on every save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::chain::Chain;
use crate::error::SnapshotError;
use crate::snapshot::SnapshotDocument;

/// File-backed snapshot storage.
///
/// Saves rewrite the entire document; loads hand recorded hashes back
/// verbatim. A missing file is not an error — the caller seeds a fresh
/// genesis instead.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full chain state and rewrite the snapshot file.
    pub fn save(&self, chain: &Chain) -> Result<(), SnapshotError> {
        let document = SnapshotDocument::capture(chain);
        let json = serde_json::to_string_pretty(&document).map_err(SnapshotError::Serialize)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the persisted snapshot; `Ok(None)` when none exists yet.
    pub fn load(&self) -> Result<Option<SnapshotDocument>, SnapshotError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SnapshotError::Io(err)),
        };
        let document = serde_json::from_str(&contents).map_err(SnapshotError::Deserialize)?;
        Ok(Some(document))
    }
}
