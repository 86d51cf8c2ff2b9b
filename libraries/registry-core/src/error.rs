/// Core error types for the user registry
use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `RegistryError`
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Core error type for the user registry
#[derive(Error, Debug)]
pub enum RegistryError {
    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Natural key already taken
    #[error("Duplicate {field}: {value}")]
    Duplicate {
        /// Name of the conflicting field
        field: String,
        /// Value that already exists
        value: String,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database errors (for gateway implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl RegistryError {
    /// Create a duplicate error
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_field_and_value() {
        let err = RegistryError::duplicate("dni", "1234567890");
        assert_eq!(err.to_string(), "Duplicate dni: 1234567890");
    }

    #[test]
    fn test_not_found_message() {
        let err = RegistryError::UserNotFound(42);
        assert_eq!(err.to_string(), "User not found: 42");
    }
}
