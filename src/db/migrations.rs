//! Versioned schema bootstrap for the roster database.
//!
//! Every database file carries a `migrations` table with one row per applied
//! schema version. Opening a store runs whatever is pending inside a single
//! transaction, so a file is either at the previous version or the new one.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("roster.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), roster::libs::error::StorageError>(())
//! ```

use crate::libs::error::{StorageError, StorageResult};
use rusqlite::{params, Connection, Transaction};

/// Tracking table for applied schema versions.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of schema migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: students, subjects and the join table between them
        self.add_migration(1, "create_roster_tables", |tx| {
            tx.execute(crate::db::students::SCHEMA_STUDENTS, [])?;
            tx.execute(crate::db::subjects::SCHEMA_SUBJECTS, [])?;
            tx.execute(crate::db::enrollments::SCHEMA_STUDENT_SUBJECTS, [])?;
            Ok(())
        });

        // Version 2: roster queries walk the join table by subject
        self.add_migration(2, "index_enrollments_by_subject", |tx| {
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_student_subjects_subject_id ON StudentSubjects(subject_id)",
                [],
            )?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        debug_assert!(
            self.migrations.last().map_or(true, |m| m.version < version),
            "migrations must be registered in increasing version order"
        );
        self.migrations.push(Migration { version, name, up });
    }

    /// Highest version this build knows how to apply.
    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applies every pending migration in one transaction.
    ///
    /// A database whose recorded version is newer than [`Self::latest_version`]
    /// is refused with [`StorageError::UnsupportedSchemaVersion`].
    pub fn run_migrations(&self, conn: &mut Connection) -> StorageResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let latest = self.latest_version();
        if current_version > latest {
            return Err(StorageError::UnsupportedSchemaVersion {
                db_version: current_version,
                latest_supported: latest,
            });
        }

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();
        if pending.is_empty() {
            tracing::debug!(version = current_version, "database schema is up to date");
            return Ok(());
        }

        tracing::info!(pending = pending.len(), from = current_version, to = latest, "applying schema migrations");

        let tx = conn.transaction()?;
        for migration in pending {
            tracing::debug!(version = migration.version, name = migration.name, "running migration");
            if let Err(e) = (migration.up)(&tx) {
                tracing::error!(version = migration.version, name = migration.name, error = %e, "migration failed");
                return Err(e.into());
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Highest applied version, or 0 for a fresh file.
    fn get_current_version(&self, conn: &Connection) -> StorageResult<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> StorageResult<bool> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// `(version, name, applied_at)` for every applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> StorageResult<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(history)
    }
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> StorageResult<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version of the database behind `conn`.
///
/// Returns 0 when the tracking table has not been created yet.
pub fn get_db_version(conn: &Connection) -> StorageResult<u32> {
    let has_table: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
        [],
        |row| row.get(0),
    )?;
    if has_table == 0 {
        return Ok(0);
    }
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> StorageResult<bool> {
    let manager = MigrationManager::new();
    Ok(get_db_version(conn)? < manager.latest_version())
}
