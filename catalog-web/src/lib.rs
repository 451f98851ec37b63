//! catalog-web library — movie catalog web service
//!
//! Serves the catalog UI and the movie record API. All state lives in
//! the database; handlers share one connection pool injected through
//! [`AppState`].

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created before the listener binds
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route(
            "/api/movies",
            get(api::list_movies)
                .post(api::create_movie)
                .put(api::update_movie)
                .delete(api::delete_movie),
        )
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
