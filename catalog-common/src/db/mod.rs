//! Database access layer
//!
//! The pool is created once in the process entry point, before the HTTP
//! listener binds, and injected into request handlers. There is no lazy
//! per-request connection setup.

mod init;
pub mod models;
pub mod movies;

pub use init::init_database;
