//! Storage error types
//!
//! Defines all errors that can occur in the persistence layer.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted collections
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The key-value backend rejected the operation (quota, security policy)
    #[error("Backend error: {0}")]
    Backend(String),

    /// No backend is available (e.g. local storage disabled in the browser)
    #[error("Storage unavailable")]
    Unavailable,
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::Backend("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Backend error: quota exceeded");

        assert_eq!(StorageError::Unavailable.to_string(), "Storage unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let storage_err: StorageError = io_err.into();
        assert!(matches!(storage_err, StorageError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let storage_err: StorageError = json_err.into();
        assert!(matches!(storage_err, StorageError::Serialization(_)));
    }
}
