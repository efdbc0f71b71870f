//! # Store Traits

use super::errors::StoreResult;
use super::model::{Todo, TodoDocument, TodoId, TodoPatch};

/// Whole-document persistence
///
/// A backend only knows how to read and write the complete document. It is
/// never asked for partial updates.
pub trait DocumentBackend: Send + Sync + std::fmt::Debug {
    /// Read and parse the full document
    fn read(&self) -> StoreResult<TodoDocument>;

    /// Overwrite the full document
    fn write(&self, document: &TodoDocument) -> StoreResult<()>;
}

/// Access to the todo collection
///
/// This is the capability handlers depend on, so tests can swap the file
/// store for an in-memory one.
pub trait TodoStore: Send + Sync + std::fmt::Debug {
    /// All items, in insertion order
    fn load_all(&self) -> StoreResult<Vec<Todo>>;

    /// Item with `id`, if any
    fn get_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>>;

    /// Append a new item with a fresh id
    fn insert(&self, title: &str) -> StoreResult<Todo>;

    /// Merge `patch` into the item with `id`. `None` if there is no such item.
    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreResult<Option<Todo>>;

    /// Remove the item with `id`. `false` if there is no such item.
    fn delete(&self, id: TodoId) -> StoreResult<bool>;
}
