/// User domain types
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// User identifier, assigned by storage on creation
pub type UserId = i64;

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// National identity number (natural key)
    pub dni: String,

    /// Display name
    pub name: String,
}

/// Data required to register a user
///
/// Carries no identifier: ids are only ever assigned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// National identity number (natural key)
    pub dni: String,

    /// Display name
    pub name: String,
}

impl NewUser {
    /// Create a new registration payload
    pub fn new(dni: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dni: dni.into(),
            name: name.into(),
        }
    }

    /// Check that both fields carry a value
    pub fn validate(&self) -> Result<()> {
        if self.dni.trim().is_empty() {
            return Err(RegistryError::invalid_input("dni must not be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(RegistryError::invalid_input("name must not be empty"));
        }
        Ok(())
    }

    /// Attach a storage-assigned id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            dni: self.dni,
            name: self.name,
        }
    }
}
