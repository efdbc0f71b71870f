//! todo-service - HTTP service for a file-backed todo collection
//!
//! - `store`: the collection, read and written as one JSON document
//! - `http_server`: routes, handlers and the error boundary
//! - `cli`: process entry (`init`, `serve`)
//! - `observability`: log subscriber setup

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
