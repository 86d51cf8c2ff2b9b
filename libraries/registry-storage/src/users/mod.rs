//! User queries

use crate::error::{Result, StorageError};
use registry_core::types::{NewUser, User, UserId};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    dni: String,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            dni: row.dni,
            name: row.name,
        }
    }
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>("SELECT id, dni, name FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Get user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, dni, name FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(User::from))
}

/// Get user by DNI
pub async fn find_by_dni(pool: &SqlitePool, dni: &str) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>("SELECT id, dni, name FROM users WHERE dni = ?")
        .bind(dni)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(User::from))
}

/// Insert a user
///
/// # Returns
///
/// The stored user including the ID assigned by `SQLite`. A second insert
/// with the same `dni` fails with [`StorageError::Duplicate`].
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let result = sqlx::query("INSERT INTO users (dni, name) VALUES (?, ?)")
        .bind(&user.dni)
        .bind(&user.name)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StorageError::duplicate("dni", user.dni.clone())
            }
            other => StorageError::Database(other),
        })?;

    Ok(user.into_user(result.last_insert_rowid()))
}
