//! Movie store access
//!
//! One function per store operation: find-all, insert-one, update-one
//! (full field overwrite), delete-one. Identifiers are UUIDs assigned
//! here on insert and transported as strings; lookups rehydrate the
//! string back into a [`Uuid`], so a malformed id surfaces as an error
//! rather than silently matching nothing.

use crate::error::{Error, Result};
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use super::models::{decode_actors, Movie};

/// Fetch every movie in the collection.
pub async fn find_all(db: &Pool<Sqlite>) -> Result<Vec<Movie>> {
    let rows = sqlx::query_as::<_, (String, String, String, i64)>(
        "SELECT id, title, actors, year FROM movies",
    )
    .fetch_all(db)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, title, actors, year)| Movie {
            id,
            title,
            actors: decode_actors(&actors),
            year,
        })
        .collect())
}

/// Insert a new movie; the store assigns the identifier.
///
/// Returns the assigned id. An insert that reports zero affected rows
/// is treated as an unacknowledged write.
pub async fn insert_one(
    db: &Pool<Sqlite>,
    title: &str,
    actors: &[String],
    year: i64,
) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let encoded = serde_json::to_string(actors)
        .map_err(|e| Error::Internal(format!("Failed to encode actors: {}", e)))?;

    let result = sqlx::query("INSERT INTO movies (id, title, actors, year) VALUES (?, ?, ?, ?)")
        .bind(id.to_string())
        .bind(title)
        .bind(encoded)
        .bind(year)
        .execute(db)
        .await?;

    if result.rows_affected() != 1 {
        return Err(Error::Internal("Insert was not acknowledged".to_string()));
    }

    Ok(id)
}

/// Overwrite all data fields of the movie with the given id.
///
/// Returns `true` when a row matched. SQLite counts a matched row as
/// changed even when the new values equal the old, so `false` means
/// exactly "id not found".
pub async fn update_one(
    db: &Pool<Sqlite>,
    id: &str,
    title: &str,
    actors: &[String],
    year: i64,
) -> Result<bool> {
    let id = parse_id(id)?;
    let encoded = serde_json::to_string(actors)
        .map_err(|e| Error::Internal(format!("Failed to encode actors: {}", e)))?;

    let result = sqlx::query("UPDATE movies SET title = ?, actors = ?, year = ? WHERE id = ?")
        .bind(title)
        .bind(encoded)
        .bind(year)
        .bind(id.to_string())
        .execute(db)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Remove the movie with the given id. Returns `true` when a row matched.
pub async fn delete_one(db: &Pool<Sqlite>, id: &str) -> Result<bool> {
    let id = parse_id(id)?;

    let result = sqlx::query("DELETE FROM movies WHERE id = ?")
        .bind(id.to_string())
        .execute(db)
        .await?;

    Ok(result.rows_affected() == 1)
}

/// Rehydrate a transported id into the store's native identifier type.
///
/// Also canonicalizes the textual form (lowercase, hyphenated) so
/// lookups match rows written by [`insert_one`].
fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::InvalidInput(format!("Malformed movie id: {}", id)))
}
