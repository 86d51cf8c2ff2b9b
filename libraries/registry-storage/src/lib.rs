//! User Registry Storage
//!
//! `SQLite` persistence gateway for the user registry.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its queries
//! - **Gateway**: [`SqliteUserGateway`] implements `registry_core::UserGateway`
//!   on top of those queries
//! - **Embedded Migrations**: schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_core::{NewUser, UserGateway};
//! use registry_storage::SqliteUserGateway;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = SqliteUserGateway::connect("sqlite://registry.db", 5).await?;
//!
//! let user = gateway.create(NewUser::new("1234567890", "Test")).await?;
//! let users = gateway.list_all().await?;
//! assert!(users.contains(&user));
//! # Ok(())
//! # }
//! ```

mod error;
mod gateway;

// Vertical slices
pub mod users;

pub use error::StorageError;
pub use gateway::SqliteUserGateway;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://registry.db>`)
/// * `max_connections` - Pool size for file-backed databases
///
/// In-memory databases are limited to a single long-lived connection, since
/// every `SQLite` memory connection otherwise opens its own empty database.
///
/// # Errors
///
/// Returns an error if the database folder cannot be created or the
/// connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let in_memory = is_in_memory(database_url);

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(std::time::Duration::from_secs(30)); // Wait up to 30s for locks

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);

        // create_if_missing only creates the file, not its folder
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::debug!(in_memory, "Pool created");

    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
