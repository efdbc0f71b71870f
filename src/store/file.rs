//! # JSON File Backend

use std::fs;
use std::path::{Path, PathBuf};

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};
use super::model::TodoDocument;

/// Stores the document as a single JSON file
///
/// Writes overwrite the file in place. There is no temp-file rename, so a
/// crash mid-write can leave a truncated document.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write an empty document, creating parent directories as needed
    pub fn create_empty(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Write(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        self.write(&TodoDocument::default())
    }
}

impl DocumentBackend for JsonFileBackend {
    fn read(&self) -> StoreResult<TodoDocument> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Read(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| StoreError::Read(format!("{}: invalid document: {}", self.path.display(), e)))
    }

    fn write(&self, document: &TodoDocument) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        fs::write(&self.path, content)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))
    }
}
