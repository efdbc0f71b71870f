//! # HTTP Server Module
//!
//! Axum server for the todo collection.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `{prefix}/` - List all todos
//! - `{prefix}/add` - Create a todo
//! - `{prefix}/{id}` - Get one todo
//! - `{prefix}/update/{id}` - Merge fields into a todo
//! - `{prefix}/delete/{id}` - Delete a todo
//!
//! `{prefix}` defaults to `/todos`.

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod todo_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use todo_routes::{todo_routes, TodoState};
