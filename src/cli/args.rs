//! CLI argument definitions using clap
//!
//! Commands:
//! - todo-service init --config <path> [--force]
//! - todo-service serve --config <path> [--port <port>] [--data-file <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todo-service - HTTP service for a file-backed todo collection
#[derive(Parser, Debug)]
#[command(name = "todo-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data file with an empty collection
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./todo-service.json")]
        config: PathBuf,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./todo-service.json")]
        config: PathBuf,

        /// Port to listen on (overrides the configuration file)
        #[arg(long)]
        port: Option<u16>,

        /// Data file path (overrides the configuration file)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
