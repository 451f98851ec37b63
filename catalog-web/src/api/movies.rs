//! Movie record API
//!
//! Four handlers, each a direct translation of an HTTP request into a
//! single store call: list, create, update (full field overwrite), and
//! delete. Validation is limited to presence checks and the year-range
//! bound; anything the store layer rejects is logged and reported as a
//! generic 500, never propagated raw to the client.
//!
//! The PUT endpoint speaks plain text in both directions; the other
//! three use JSON bodies.

use axum::{extract::State, http::StatusCode, Json};
use catalog_common::db::models::Movie;
use catalog_common::db::movies;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Generic `{message}` response body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Actors as sent by clients: an already-split list or a comma-separated
/// string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActorsInput {
    List(Vec<String>),
    Csv(String),
}

/// Year as sent by clients: a number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub actors: Option<ActorsInput>,
    pub year: Option<YearInput>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovieRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub actors: Option<ActorsInput>,
    pub year: Option<YearInput>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMovieRequest {
    pub id: Option<String>,
}

// ============================================================================
// Validation & Normalization
// ============================================================================

/// Split a comma-separated string, or trim an already-split list.
/// Empty elements are dropped.
fn normalize_actors(input: &ActorsInput) -> Vec<String> {
    match input {
        ActorsInput::List(items) => items
            .iter()
            .map(|actor| actor.trim().to_string())
            .filter(|actor| !actor.is_empty())
            .collect(),
        ActorsInput::Csv(csv) => csv
            .split(',')
            .map(|actor| actor.trim().to_string())
            .filter(|actor| !actor.is_empty())
            .collect(),
    }
}

/// Parse and bounds-check the year against `[1900, currentYear]`.
///
/// Returns the rejection message (with the computed upper bound) on
/// failure, for use verbatim in 400 responses.
fn validate_year(input: &YearInput) -> Result<i64, String> {
    let current_year = i64::from(Utc::now().year());
    let parsed = match input {
        YearInput::Number(n) => Some(*n),
        YearInput::Text(text) => text.trim().parse::<i64>().ok(),
    };

    match parsed {
        Some(year) if (1900..=current_year).contains(&year) => Ok(year),
        _ => Err(format!("Year must be between 1900 and {}", current_year)),
    }
}

/// Presence checks mirror the original form semantics: an empty string
/// counts as absent, for the text fields and the comma-separated actors
/// form alike.
fn text_is_present(text: &str) -> bool {
    !text.trim().is_empty()
}

fn actors_is_present(actors: &ActorsInput) -> bool {
    match actors {
        ActorsInput::List(_) => true,
        ActorsInput::Csv(csv) => text_is_present(csv),
    }
}

fn year_is_present(year: &YearInput) -> bool {
    match year {
        YearInput::Number(_) => true,
        YearInput::Text(text) => text_is_present(text),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/movies
///
/// Returns every record in the collection. No pagination; no partial
/// results on error.
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, (StatusCode, Json<MessageResponse>)> {
    match movies::find_all(&state.db).await {
        Ok(list) => Ok(Json(list)),
        Err(e) => {
            error!("Error fetching movies: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to fetch movies")),
            ))
        }
    }
}

/// POST /api/movies
///
/// Validates presence of all three fields and the year bound, then
/// inserts one record; the store assigns the id.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(req): Json<CreateMovieRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    let (title, actors, year) = match (req.title, req.actors, req.year) {
        (Some(title), Some(actors), Some(year))
            if text_is_present(&title) && actors_is_present(&actors) && year_is_present(&year) =>
        {
            (title, actors, year)
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::new("All fields are required.")),
            );
        }
    };

    let year = match validate_year(&year) {
        Ok(year) => year,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message)));
        }
    };

    let actors = normalize_actors(&actors);

    match movies::insert_one(&state.db, &title, &actors, year).await {
        Ok(_id) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("Movie added successfully")),
        ),
        Err(catalog_common::Error::Internal(e)) => {
            error!("Insert not acknowledged: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Failed to add movie")),
            )
        }
        Err(e) => {
            error!("Error adding movie: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error adding movie")),
            )
        }
    }
}

/// PUT /api/movies
///
/// Full-document field overwrite keyed by id; no merge or patch
/// semantics. Responds in plain text.
pub async fn update_movie(
    State(state): State<AppState>,
    Json(req): Json<UpdateMovieRequest>,
) -> (StatusCode, String) {
    let (id, title, actors, year) = match (req.id, req.title, req.actors, req.year) {
        (Some(id), Some(title), Some(actors), Some(year))
            if text_is_present(&id)
                && text_is_present(&title)
                && actors_is_present(&actors)
                && year_is_present(&year) =>
        {
            (id, title, actors, year)
        }
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                "All fields are required.".to_string(),
            );
        }
    };

    let year = match validate_year(&year) {
        Ok(year) => year,
        Err(message) => return (StatusCode::BAD_REQUEST, message),
    };

    let actors = normalize_actors(&actors);

    match movies::update_one(&state.db, &id, &title, &actors, year).await {
        Ok(true) => (StatusCode::OK, "Movie updated successfully".to_string()),
        Ok(false) => (StatusCode::NOT_FOUND, "Movie not found".to_string()),
        Err(e) => {
            error!("Error updating movie: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error updating movie".to_string(),
            )
        }
    }
}

/// DELETE /api/movies
///
/// Removes the single record matching the id from the request body.
pub async fn delete_movie(
    State(state): State<AppState>,
    Json(req): Json<DeleteMovieRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    let id = match req.id {
        Some(id) if text_is_present(&id) => id,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse::new("ID is required")),
            );
        }
    };

    match movies::delete_one(&state.db, &id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(MessageResponse::new("Movie deleted successfully")),
        ),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Movie not found")),
        ),
        Err(e) => {
            error!("Error deleting movie: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new("Error deleting movie")),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_comma_separated_actors() {
        let input = ActorsInput::Csv("Alice, Bob ,  Carol".to_string());
        assert_eq!(normalize_actors(&input), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn trims_already_split_actors() {
        let input = ActorsInput::List(vec![" Alice ".to_string(), "Bob".to_string()]);
        assert_eq!(normalize_actors(&input), vec!["Alice", "Bob"]);
    }

    #[test]
    fn drops_empty_actor_elements() {
        let input = ActorsInput::Csv("Alice,, ,Bob".to_string());
        assert_eq!(normalize_actors(&input), vec!["Alice", "Bob"]);
    }

    #[test]
    fn year_boundaries() {
        let current_year = i64::from(Utc::now().year());

        assert!(validate_year(&YearInput::Number(1899)).is_err());
        assert_eq!(validate_year(&YearInput::Number(1900)), Ok(1900));
        assert_eq!(
            validate_year(&YearInput::Number(current_year)),
            Ok(current_year)
        );
        assert!(validate_year(&YearInput::Number(current_year + 1)).is_err());
    }

    #[test]
    fn year_accepts_numeric_string() {
        assert_eq!(validate_year(&YearInput::Text("2020".to_string())), Ok(2020));
        assert!(validate_year(&YearInput::Text("not a year".to_string())).is_err());
    }

    #[test]
    fn rejection_message_names_the_computed_bound() {
        let current_year = i64::from(Utc::now().year());
        let message = validate_year(&YearInput::Number(1899)).unwrap_err();
        assert_eq!(
            message,
            format!("Year must be between 1900 and {}", current_year)
        );
    }
}
