//! Error types for admin operations

use thiserror::Error;

use crate::storage::StorageError;

/// Errors that can occur in dashboard operations
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Service not found: {0}")]
    UnknownService(String),

    #[error("Invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AdminError::MissingField("English title").to_string(),
            "English title is required"
        );
        assert_eq!(
            AdminError::InvalidValue {
                field: "price",
                value: "abc".to_string()
            }
            .to_string(),
            "Invalid price: \"abc\""
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let err: AdminError = StorageError::Unavailable.into();
        assert!(matches!(err, AdminError::Storage(StorageError::Unavailable)));
    }
}
