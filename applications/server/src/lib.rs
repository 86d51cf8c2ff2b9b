//! User Registry Server Library
//!
//! JSON REST API over the user registry: list, fetch and register users.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use app::{create_router, serve};
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
