//! Error types for the geographic repository.

use std::path::PathBuf;

/// Errors raised while opening or querying a geographic database.
///
/// Query failures are driver errors passed through unchanged; the
/// repository never raises on an empty result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database file not found: {}", .0.display())]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
