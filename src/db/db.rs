use super::migrations::init_with_migrations;
use crate::libs::error::StorageResult;
use rusqlite::{Connection, OpenFlags};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

pub const DB_FILE_NAME: &str = "roster.db";

/// An open SQLite connection with foreign keys enforced and the schema applied.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if absent) the database file at `path` and migrates it.
    pub fn open(path: &Path) -> StorageResult<Db> {
        let started_at = Instant::now();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut conn = Connection::open(path)?;
        bootstrap(&mut conn)?;
        tracing::debug!(
            path = %path.display(),
            duration_ms = started_at.elapsed().as_millis() as u64,
            "database opened"
        );

        Ok(Db { conn })
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn open_in_memory() -> StorageResult<Db> {
        let mut conn = Connection::open_in_memory()?;
        bootstrap(&mut conn)?;
        tracing::debug!("in-memory database opened");

        Ok(Db { conn })
    }

    /// Opens the file without touching its schema, for inspection tooling.
    pub fn new_without_migrations(path: &Path) -> StorageResult<Connection> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Read-only connection to an existing file; `None` when there is no file yet.
    pub fn open_read_only(path: &Path) -> StorageResult<Option<Connection>> {
        if !path.exists() {
            return Ok(None);
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
        Ok(Some(conn))
    }
}

fn bootstrap(conn: &mut Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    init_with_migrations(conn)?;
    Ok(())
}
