/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Unique constraint rejected the write
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: String, value: String },

    /// Migration error
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error while preparing the database location
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a duplicate error
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<StorageError> for registry_core::RegistryError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { field, value } => Self::Duplicate { field, value },
            other => Self::database(other.to_string()),
        }
    }
}
