//! User Registry Core
//!
//! Storage-agnostic domain types, the gateway trait, and error handling for
//! the user registry.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`
//! - **Core Traits**: `UserGateway`, the persistence port the HTTP layer talks to
//! - **Error Handling**: Unified `RegistryError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use registry_core::types::NewUser;
//!
//! let new_user = NewUser::new("1234567890", "Test");
//! assert!(new_user.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod gateway;
pub mod types;

// Re-export commonly used types
pub use error::{RegistryError, Result};
pub use gateway::UserGateway;
pub use types::{NewUser, User, UserId};

#[cfg(any(test, feature = "mock"))]
pub use gateway::MockUserGateway;
