/// Users API routes
use crate::{
    error::{Result, ServerError},
    services::register_user,
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use registry_core::{NewUser, RegistryError, User, UserId};

/// GET /api/users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.users.list_all().await?;
    tracing::debug!("Listing {} users", users.len());
    Ok(Json(users))
}

/// GET /api/users/:id
pub async fn get_user(
    State(app_state): State<AppState>,
    id: std::result::Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>> {
    let Path(id) = id.map_err(|e| ServerError::BadRequest(format!("Invalid user id: {}", e)))?;

    let user = app_state
        .users
        .find_by_id(id)
        .await?
        .ok_or(RegistryError::UserNotFound(id))?;

    Ok(Json(user))
}

/// POST /api/users
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(new_user) =
        payload.map_err(|e| ServerError::BadRequest(format!("Invalid user payload: {}", e)))?;

    let user = register_user(app_state.users.as_ref(), new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
