//! Error type for the roster storage layer.
//!
//! Everything the store can fail with is an I/O-level failure: the database
//! file cannot be created, a statement fails, or the file was written by a
//! newer schema. "Not found" is never an error here; lookups return `Option`
//! and relation queries return empty vectors.

/// Failures surfaced by [`crate::libs::roster::RosterStore`] and the `db` layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, statement or connection failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The directory holding the database file could not be created.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database was migrated by a newer build than this one.
    #[error("database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion { db_version: u32, latest_supported: u32 },
}

pub type StorageResult<T> = Result<T, StorageError>;
