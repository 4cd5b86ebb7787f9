//! # Schoople DB
//!
//! Connection pool, embedded migrations and the [`Store`] read handle.
//!
//! The API never writes; every query here is a keyed lookup returning entity
//! rows or pre-joined projection rows. Writes belong to the CLI.
//!
//! # Example
//!
//! ```ignore
//! use schoople_db::{Store, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&database_url, 10).await?;
//! run_migrations(&pool).await?;
//! let store = Store::Postgres(pool);
//! let years = store.active_academic_years().await?;
//! ```

#[cfg(feature = "memory")]
pub mod memory;
mod postgres;
mod store;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;
pub use store::Store;

#[cfg(feature = "memory")]
pub use memory::MemoryStore;

/// Migrations under the workspace `migrations/` directory, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Connects a PostgreSQL pool.
///
/// # Errors
///
/// Returns the driver error if the URL is invalid or the server is unreachable.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Applies every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
