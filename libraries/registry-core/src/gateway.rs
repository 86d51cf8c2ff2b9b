//! Gateway trait for user persistence

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Persistence gateway for users
///
/// This trait abstracts storage operations so the HTTP layer never depends
/// on a specific backend. Implementations must be shareable across request
/// tasks.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// Get every stored user
    ///
    /// No ordering guarantee is part of the contract.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Get user by ID, `None` if no such user exists
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Get user by natural key, `None` if no such user exists
    async fn find_by_dni(&self, dni: &str) -> Result<Option<User>>;

    /// Persist a new user and return it with its assigned ID
    ///
    /// Returns [`RegistryError::Duplicate`](crate::RegistryError::Duplicate)
    /// when the store already holds the same `dni`.
    async fn create(&self, user: NewUser) -> Result<User>;
}
