//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Both variants are unexpected failures from the point of view of a request:
/// they are never mapped to a client error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The document could not be read or is not a valid todo document
    #[error("Failed to read store document: {0}")]
    Read(String),

    /// The document could not be written back
    #[error("Failed to write store document: {0}")]
    Write(String),
}

impl StoreError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Read(_) => "TODO_STORAGE_READ_FAILED",
            StoreError::Write(_) => "TODO_STORAGE_WRITE_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::Read("x".to_string()).code(),
            "TODO_STORAGE_READ_FAILED"
        );
        assert_eq!(
            StoreError::Write("x".to_string()).code(),
            "TODO_STORAGE_WRITE_FAILED"
        );
    }

    #[test]
    fn test_display_includes_cause() {
        let err = StoreError::Read("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }
}
