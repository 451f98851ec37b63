//! Common error types for the movie catalog

use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared across the catalog crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error, including a failed initial connect
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
