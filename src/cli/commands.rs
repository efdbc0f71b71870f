//! CLI command implementations
//!
//! `init` prepares the data file, `serve` verifies it and runs the HTTP
//! server until Ctrl-C.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::store::{FileStore, TodoStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON data file (default "./todos.json")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./todos.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file, or use defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        Ok(())
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config, force } => init(&config, force),
        Command::Serve {
            config,
            port,
            data_file,
        } => serve(&config, port, data_file),
    }
}

/// Create the data file with an empty collection
///
/// Refuses to overwrite an existing data file unless `force` is set.
pub fn init(config_path: &Path, force: bool) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    init_logging(config.log_json);

    let store = FileStore::open(&config.data_file);
    if store.backend().exists() && !force {
        return Err(CliError::already_initialized(&config.data_file));
    }

    store.backend().create_empty()?;
    info!(data_file = %config.data_file.display(), "data file initialized");

    Ok(())
}

/// Start the HTTP server
///
/// The data file must already exist and parse; the server never creates it.
pub fn serve(config_path: &Path, port: Option<u16>, data_file: Option<PathBuf>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    config.validate()?;

    init_logging(config.log_json);

    let store = FileStore::open(&config.data_file);
    let existing = store.load_all()?;
    info!(
        data_file = %config.data_file.display(),
        todos = existing.len(),
        "data file loaded"
    );

    let server = HttpServer::new(config.http.clone(), Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, data_file: &Path) -> PathBuf {
        let path = dir.path().join("todo-service.json");
        let config = serde_json::json!({
            "data_file": data_file,
            "http": {"port": 4000}
        });
        fs::write(&path, config.to_string()).unwrap();
        path
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("todos.json");
        let config = Config::load(&write_config(&temp, &data_file)).unwrap();

        assert_eq!(config.data_file, data_file);
        assert_eq!(config.http.port, 4000);
        assert_eq!(config.http.route_prefix, "/todos");
        assert!(!config.log_json);
    }

    #[test]
    fn test_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load(&path).unwrap_err().code(), CliErrorCode::ConfigError);

        fs::write(&path, r#"{"http": {"port": 0}}"#).unwrap();
        assert_eq!(Config::load(&path).unwrap_err().code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_init_creates_and_guards_data_file() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("data/todos.json");
        let config_path = write_config(&temp, &data_file);

        init(&config_path, false).unwrap();
        let store = FileStore::open(&data_file);
        assert!(store.load_all().unwrap().is_empty());

        store.insert("keep me").unwrap();
        let err = init(&config_path, false).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::AlreadyInitialized);
        assert_eq!(store.load_all().unwrap().len(), 1);

        init(&config_path, true).unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_init_reports_unwritable_data_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let config_path = write_config(&temp, &blocker.join("todos.json"));

        let err = init(&config_path, false).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::InitFailed);
    }

    #[test]
    fn test_serve_requires_data_file() {
        let temp = TempDir::new().unwrap();
        let data_file = temp.path().join("missing.json");
        let config_path = write_config(&temp, &data_file);

        let err = serve(&config_path, None, None).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::NotInitialized);
    }
}
