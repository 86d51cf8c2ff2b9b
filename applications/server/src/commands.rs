//! One-shot administrative commands run outside the HTTP server

use crate::{config::ServerConfig, services::register_user};
use registry_core::{NewUser, User, UserGateway};
use registry_storage::SqliteUserGateway;

/// Open the configured database with migrations applied
pub async fn open_gateway(config: &ServerConfig) -> anyhow::Result<SqliteUserGateway> {
    let gateway = SqliteUserGateway::connect(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    Ok(gateway)
}

/// Register a user with the same checks as `POST /api/users`
///
/// The pool is closed before returning, whether or not registration succeeded.
pub async fn add_user(config: &ServerConfig, new_user: NewUser) -> anyhow::Result<User> {
    let gateway = open_gateway(config).await?;

    let result = register_user(&gateway, new_user).await;
    gateway.close().await;

    Ok(result?)
}

/// Every stored user
pub async fn list_users(config: &ServerConfig) -> anyhow::Result<Vec<User>> {
    let gateway = open_gateway(config).await?;

    let result = gateway.list_all().await;
    gateway.close().await;

    Ok(result?)
}
