//! Observability for todo-service
//!
//! Log events go through `tracing`. The subscriber is installed once per
//! process by the CLI; `RUST_LOG` selects the filter (default `info`).

mod logger;

pub use logger::{env_filter, init_logging};
