use thiserror::Error;

/// Browser storage failures for the project record and the session
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage operation failed: {operation} - {source}")]
    Backend {
        operation: String,
        #[source]
        source: gloo_storage::errors::StorageError,
    },

    #[error("Stored {key} could not be read: {reason}")]
    Corrupt { key: String, reason: String },
}

impl StorageError {
    pub fn backend(operation: &str, source: gloo_storage::errors::StorageError) -> Self {
        StorageError::Backend {
            operation: operation.to_string(),
            source,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
