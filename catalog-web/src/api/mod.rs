//! HTTP API handlers for catalog-web

pub mod health;
pub mod movies;
pub mod ui;

pub use health::health_routes;
pub use movies::{create_movie, delete_movie, list_movies, update_movie};
pub use ui::{serve_app_js, serve_index};
