//! Integration tests for database initialization and movie store access

use catalog_common::db::{self, movies};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test helper: initialize a fresh database in a temp directory.
///
/// The TempDir must be kept alive for the lifetime of the pool.
async fn setup_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
    let pool = db::init_database(&url)
        .await
        .expect("Should initialize database");
    (dir, pool)
}

#[tokio::test]
async fn connect_failure_is_a_config_error() {
    // mode=ro refuses to create a missing file, so the connect fails
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let url = format!("sqlite://{}?mode=ro", dir.path().join("missing.db").display());

    let err = db::init_database(&url)
        .await
        .expect_err("Connect to a missing read-only database should fail");
    assert!(matches!(err, catalog_common::Error::Config(_)));
}

#[tokio::test]
async fn init_is_idempotent() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());

    let first = db::init_database(&url).await.expect("First init");
    movies::insert_one(&first, "Alien", &["Sigourney Weaver".to_string()], 1979)
        .await
        .expect("Insert");
    first.close().await;

    // Second init against the same file must not lose data
    let second = db::init_database(&url).await.expect("Second init");
    let all = movies::find_all(&second).await.expect("Find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Alien");
}

#[tokio::test]
async fn insert_then_find_all_round_trip() {
    let (_dir, pool) = setup_db().await;

    let actors = vec!["Alice".to_string(), "Bob".to_string()];
    let id = movies::insert_one(&pool, "Movie A", &actors, 2020)
        .await
        .expect("Insert");

    let all = movies::find_all(&pool).await.expect("Find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id.to_string());
    assert_eq!(all[0].title, "Movie A");
    assert_eq!(all[0].actors, actors);
    assert_eq!(all[0].year, 2020);
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let (_dir, pool) = setup_db().await;

    let id = movies::insert_one(&pool, "Old Title", &["Old Actor".to_string()], 1999)
        .await
        .expect("Insert");

    let new_actors = vec!["New Actor".to_string()];
    let matched = movies::update_one(&pool, &id.to_string(), "New Title", &new_actors, 2005)
        .await
        .expect("Update");
    assert!(matched);

    let all = movies::find_all(&pool).await.expect("Find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "New Title");
    assert_eq!(all[0].actors, new_actors);
    assert_eq!(all[0].year, 2005);
}

#[tokio::test]
async fn update_unknown_id_matches_nothing() {
    let (_dir, pool) = setup_db().await;

    let matched = movies::update_one(
        &pool,
        &uuid::Uuid::new_v4().to_string(),
        "Title",
        &["Actor".to_string()],
        2000,
    )
    .await
    .expect("Update should not error");
    assert!(!matched);
}

#[tokio::test]
async fn update_with_unchanged_values_still_matches() {
    let (_dir, pool) = setup_db().await;

    let actors = vec!["Same".to_string()];
    let id = movies::insert_one(&pool, "Same Title", &actors, 2010)
        .await
        .expect("Insert");

    // No-op overwrite of an existing row still counts as matched
    let matched = movies::update_one(&pool, &id.to_string(), "Same Title", &actors, 2010)
        .await
        .expect("Update");
    assert!(matched);
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let (_dir, pool) = setup_db().await;

    let keep = movies::insert_one(&pool, "Keep", &["A".to_string()], 2001)
        .await
        .expect("Insert");
    let remove = movies::insert_one(&pool, "Remove", &["B".to_string()], 2002)
        .await
        .expect("Insert");

    let matched = movies::delete_one(&pool, &remove.to_string())
        .await
        .expect("Delete");
    assert!(matched);

    let all = movies::find_all(&pool).await.expect("Find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.to_string());
}

#[tokio::test]
async fn delete_unknown_id_matches_nothing() {
    let (_dir, pool) = setup_db().await;

    let matched = movies::delete_one(&pool, &uuid::Uuid::new_v4().to_string())
        .await
        .expect("Delete should not error");
    assert!(!matched);
}

#[tokio::test]
async fn malformed_id_is_an_error() {
    let (_dir, pool) = setup_db().await;

    assert!(movies::delete_one(&pool, "not-a-uuid").await.is_err());
    assert!(
        movies::update_one(&pool, "not-a-uuid", "Title", &["Actor".to_string()], 2000)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn bare_scalar_actors_column_is_coerced_to_list() {
    let (_dir, pool) = setup_db().await;

    // Legacy row: actors column holds raw text instead of a JSON array
    sqlx::query("INSERT INTO movies (id, title, actors, year) VALUES (?, ?, ?, ?)")
        .bind(uuid::Uuid::new_v4().to_string())
        .bind("Legacy")
        .bind("Single Actor")
        .bind(1995)
        .execute(&pool)
        .await
        .expect("Raw insert");

    let all = movies::find_all(&pool).await.expect("Find all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].actors, vec!["Single Actor".to_string()]);
}
