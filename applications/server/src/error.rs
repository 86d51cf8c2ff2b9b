/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_core::RegistryError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<RegistryError> for ServerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UserNotFound(_) => ServerError::NotFound(err.to_string()),
            RegistryError::Duplicate { .. } => ServerError::Conflict(err.to_string()),
            RegistryError::InvalidInput(msg) => ServerError::BadRequest(msg),
            RegistryError::Database(msg) => ServerError::Database(msg),
        }
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Database(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::NotFound(msg)
            | ServerError::Conflict(msg)
            | ServerError::BadRequest(msg) => msg,
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                "Database error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
