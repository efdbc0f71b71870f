//! CLI-specific error types
//!
//! Every CLI error is fatal: `main` prints it and exits non-zero.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Data file already exists
    AlreadyInitialized,
    /// Data file missing or unreadable
    NotInitialized,
    /// Data file could not be written
    InitFailed,
    /// Server failed to start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "TODO_CLI_CONFIG_ERROR",
            Self::AlreadyInitialized => "TODO_CLI_ALREADY_INITIALIZED",
            Self::NotInitialized => "TODO_CLI_NOT_INITIALIZED",
            Self::InitFailed => "TODO_CLI_INIT_FAILED",
            Self::ServeFailed => "TODO_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {}", .code.code(), .message)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn already_initialized(path: &std::path::Path) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!(
                "Data file {} already exists. Use --force to overwrite it.",
                path.display()
            ),
        )
    }

    pub fn not_initialized(cause: impl Into<String>) -> Self {
        Self::new(
            CliErrorCode::NotInitialized,
            format!(
                "Data file is not usable ({}). Run 'todo-service init' first.",
                cause.into()
            ),
        )
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::serve_failed(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Read(msg) => Self::not_initialized(msg),
            StoreError::Write(msg) => Self::new(CliErrorCode::InitFailed, msg),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_code_prefix() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "TODO_CLI_CONFIG_ERROR: bad port");
    }

    #[test]
    fn test_store_read_error_means_not_initialized() {
        let err = CliError::from(StoreError::Read("missing".to_string()));
        assert_eq!(err.code(), CliErrorCode::NotInitialized);
        assert!(err.message().contains("todo-service init"));
    }

    #[test]
    fn test_store_write_error_means_init_failed() {
        let err = CliError::from(StoreError::Write("read-only file system".to_string()));
        assert_eq!(err.code(), CliErrorCode::InitFailed);
        assert!(err.to_string().starts_with("TODO_CLI_INIT_FAILED"));
    }
}
