use crate::{create_pool, run_migrations, users, StorageError};
use async_trait::async_trait;
use registry_core::{
    error::Result,
    gateway::UserGateway,
    types::{NewUser, User, UserId},
};
use sqlx::SqlitePool;

/// User gateway backed by `SQLite`
#[derive(Clone)]
pub struct SqliteUserGateway {
    pool: SqlitePool,
}

impl SqliteUserGateway {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool and bring the schema up to date
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserGateway for SqliteUserGateway {
    async fn list_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await.map_err(Into::into)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await.map_err(Into::into)
    }

    async fn find_by_dni(&self, dni: &str) -> Result<Option<User>> {
        users::find_by_dni(&self.pool, dni).await.map_err(Into::into)
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        tracing::debug!(dni = %user.dni, "Inserting user");
        users::create(&self.pool, user).await.map_err(Into::into)
    }
}
