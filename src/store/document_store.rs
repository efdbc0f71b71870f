//! # Document Store
//!
//! Implements the collection operations on top of a whole-document backend.
//! Every mutation is one full read, an in-memory change, and one full write.
//! Nothing is cached between calls.

use std::sync::Mutex;

use tracing::debug;

use super::backend::{DocumentBackend, TodoStore};
use super::errors::{StoreError, StoreResult};
use super::file::JsonFileBackend;
use super::id::next_id;
use super::memory::MemoryBackend;
use super::model::{Todo, TodoDocument, TodoId, TodoPatch};

/// Store persisted to a JSON file
pub type FileStore = DocumentStore<JsonFileBackend>;

/// Store kept in memory
pub type MemoryStore = DocumentStore<MemoryBackend>;

#[derive(Debug)]
pub struct DocumentStore<B: DocumentBackend> {
    backend: B,
    // Serializes read-modify-write cycles within this process. Other processes
    // writing the same file can still overwrite each other.
    write_lock: Mutex<()>,
}

impl<B: DocumentBackend> DocumentStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run `f` against a freshly loaded document and persist it if `f` says so
    fn mutate<T>(&self, f: impl FnOnce(&mut TodoDocument) -> (T, bool)) -> StoreResult<T> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Write("store lock poisoned".to_string()))?;

        let mut document = self.backend.read()?;
        let (result, changed) = f(&mut document);
        if changed {
            self.backend.write(&document)?;
        }
        Ok(result)
    }
}

impl DocumentStore<JsonFileBackend> {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(JsonFileBackend::new(path))
    }
}

impl DocumentStore<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl<B: DocumentBackend> TodoStore for DocumentStore<B> {
    fn load_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.backend.read()?.todos)
    }

    fn get_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        Ok(self.backend.read()?.find(id).cloned())
    }

    fn insert(&self, title: &str) -> StoreResult<Todo> {
        let todo = self.mutate(|doc| match next_id(doc) {
            Ok(id) => {
                let todo = Todo::new(id, title);
                doc.todos.push(todo.clone());
                (Ok(todo), true)
            }
            Err(e) => (Err(e), false),
        })??;
        debug!(id = todo.id, "todo inserted");
        Ok(todo)
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreResult<Option<Todo>> {
        let updated = self.mutate(|doc| match doc.find_mut(id) {
            Some(todo) => {
                todo.apply(patch);
                (Some(todo.clone()), true)
            }
            None => (None, false),
        })?;
        if updated.is_some() {
            debug!(id, "todo updated");
        }
        Ok(updated)
    }

    fn delete(&self, id: TodoId) -> StoreResult<bool> {
        let removed = self.mutate(|doc| {
            let removed = doc.remove(id);
            (removed, removed)
        })?;
        if removed {
            debug!(id, "todo deleted");
        }
        Ok(removed)
    }
}
