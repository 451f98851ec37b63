//! Shared library for the movie catalog service
//!
//! Provides the error type, database initialization, and the movie
//! store access layer used by catalog-web.

pub mod db;
pub mod error;

pub use error::{Error, Result};
