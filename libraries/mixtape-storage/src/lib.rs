//! Mixtape Storage
//!
//! `SQLite` persistence layer for the Mixtape catalog API.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity owns its own queries in a dedicated
//!   module (`users`, `artists`, `genres`, `songs`, `playlists`,
//!   `playlist_songs`, `likes`)
//! - **Schema-enforced invariants**: uniqueness lives in UNIQUE indexes and
//!   cascade deletion in `ON DELETE CASCADE` clauses; the pool enables
//!   foreign-key enforcement so both are live at runtime
//! - **Executor-generic mutations**: functions a mutation sequence needs
//!   accept any `SqliteExecutor`, so checks and writes can share one
//!   transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> mixtape_core::Result<()> {
//! let pool = create_pool("sqlite://mixtape.db").await?;
//! run_migrations(&pool).await?;
//!
//! let artists = mixtape_storage::artists::list(&pool, "", 10, 0).await?;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod artists;
pub mod genres;
pub mod likes;
pub mod playlist_songs;
pub mod playlists;
pub mod songs;
pub mod users;

use mixtape_core::{MixtapeError, Result};
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at application start to ensure the schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| MixtapeError::Database(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// Foreign-key enforcement is switched on for every connection: cascade
/// deletion is a schema invariant, not something the callers orchestrate.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(MixtapeError::from)?
        .create_if_missing(true)
        .foreign_keys(true)
        // Substring filters are case-sensitive containment
        .pragma("case_sensitive_like", "1")
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
