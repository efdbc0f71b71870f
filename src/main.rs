//! todo-service CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. On failure prints the
//! error to stderr and exits non-zero.

use todo_service::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
