//! UI serving routes
//!
//! Serves the static HTML/JS UI for the movie catalog. The index page
//! carries the initial movie list, fetched through the same store path
//! the list endpoint uses, so there is a single read path for both the
//! initial render and client-side refreshes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use catalog_common::db::movies;
use tracing::error;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");

const INITIAL_MOVIES_PLACEHOLDER: &str = "/*INITIAL_MOVIES*/[]";

/// GET /
///
/// Serves the main UI page with the initial movie list injected as
/// JSON. A store failure renders the page with an empty list; the
/// client can still retry through the API.
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    let initial = match movies::find_all(&state.db).await {
        Ok(list) => serde_json::to_string(&list).unwrap_or_else(|_| "[]".to_string()),
        Err(e) => {
            error!("Error fetching movies for initial render: {}", e);
            "[]".to_string()
        }
    };

    // Escape '<' so a title cannot close the script tag early
    let initial = initial.replace('<', "\\u003c");

    Html(INDEX_HTML.replace(INITIAL_MOVIES_PLACEHOLDER, &initial))
}

/// GET /static/app.js
///
/// Serves the JavaScript application
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
