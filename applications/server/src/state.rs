/// Shared application state
use registry_core::UserGateway;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserGateway>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserGateway>) -> Self {
        Self { users }
    }
}
