//! # In-Memory Backend
//!
//! Used by tests in place of the JSON file. Every read hands back a fresh copy
//! of the document, the same as re-reading a file.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::backend::DocumentBackend;
use super::errors::{StoreError, StoreResult};
use super::model::TodoDocument;

#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: RwLock<TodoDocument>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: TodoDocument) -> Self {
        Self {
            document: RwLock::new(document),
            ..Default::default()
        }
    }

    /// Make subsequent reads fail with a read error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with a write error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current document, bypassing failure injection
    pub fn snapshot(&self) -> TodoDocument {
        match self.document.read() {
            Ok(doc) => doc.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DocumentBackend for MemoryBackend {
    fn read(&self) -> StoreResult<TodoDocument> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read("injected read failure".to_string()));
        }
        self.document
            .read()
            .map(|doc| doc.clone())
            .map_err(|_| StoreError::Read("lock poisoned".to_string()))
    }

    fn write(&self, document: &TodoDocument) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("injected write failure".to_string()));
        }
        let mut guard = self
            .document
            .write()
            .map_err(|_| StoreError::Write("lock poisoned".to_string()))?;
        *guard = document.clone();
        Ok(())
    }
}
