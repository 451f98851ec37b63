//! Database initialization
//!
//! Connects to the SQLite database named by the connection string and
//! creates the movies table if it does not exist yet. Initialization is
//! idempotent, so restarting against an existing database is safe.

use crate::{Error, Result};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

/// Connect to the database and ensure the schema exists.
///
/// The URL follows sqlx conventions, e.g. `sqlite://movies.db?mode=rwc`
/// to create the file on first run. A failed connect is a configuration
/// error; no pool is cached on failure.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(|e| Error::Config(format!("Failed to connect to database: {}", e)))?;

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_movies_table(&pool).await?;

    info!("Database ready: {}", database_url);

    Ok(pool)
}

/// Create the movies table (idempotent).
///
/// `actors` holds the JSON encoding of the actor list. Rows written by
/// earlier tooling may hold a bare string instead; the read path coerces
/// those to a single-element list.
async fn create_movies_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            actors TEXT NOT NULL,
            year INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
