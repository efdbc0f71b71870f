//! # Todo Store
//!
//! Sole owner of the persisted todo collection. The collection lives in one
//! JSON document of the form `{"todos": [...]}` and is always read and
//! written as a whole.

pub mod backend;
pub mod document_store;
pub mod errors;
pub mod file;
pub mod id;
pub mod memory;
pub mod model;

pub use backend::{DocumentBackend, TodoStore};
pub use document_store::{DocumentStore, FileStore, MemoryStore};
pub use errors::{StoreError, StoreResult};
pub use file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use model::{Todo, TodoDocument, TodoId, TodoPatch};
