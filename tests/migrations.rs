#[cfg(test)]
mod tests {
    use roster::db::db::Db;
    use roster::db::migrations::{get_db_version, needs_migration, MigrationManager};
    use roster::libs::error::StorageError;
    use rusqlite::params;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("roster.db")
        }
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_file_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations(&ctx.db_path()).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_roster_tables");
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(!manager.is_migration_applied(&conn, 99).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations(&ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len() as u32, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_schema(ctx: &mut MigrationTestContext) {
        {
            let db = Db::open(&ctx.db_path()).unwrap();
            db.conn.execute("INSERT INTO Subjects (title, maximum_capacity) VALUES ('Art', 10)", []).unwrap();
        }

        let db = Db::open(&ctx.db_path()).unwrap();
        let count: i64 = db.conn.query_row("SELECT COUNT(*) FROM Subjects", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_newer_schema_is_refused(ctx: &mut MigrationTestContext) {
        {
            let db = Db::open(&ctx.db_path()).unwrap();
            db.conn
                .execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![999, "from_the_future"])
                .unwrap();
        }

        match Db::open(&ctx.db_path()) {
            Err(StorageError::UnsupportedSchemaVersion { db_version, latest_supported }) => {
                assert_eq!(db_version, 999);
                assert_eq!(latest_supported, MigrationManager::new().latest_version());
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("newer schema should be refused"),
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_read_only_open(ctx: &mut MigrationTestContext) {
        assert!(Db::open_read_only(&ctx.db_path()).unwrap().is_none());
        assert!(!ctx.db_path().exists());

        Db::open(&ctx.db_path()).unwrap();
        let conn = Db::open_read_only(&ctx.db_path()).unwrap().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), MigrationManager::new().latest_version());
        assert!(conn.execute("INSERT INTO Subjects (title, maximum_capacity) VALUES ('Art', 10)", []).is_err());
    }

    #[test]
    fn test_dangling_enrollment_is_rejected() {
        let db = Db::open_in_memory().unwrap();

        let result = db
            .conn
            .execute("INSERT INTO StudentSubjects (student_id, subject_id) VALUES (?1, ?2)", params![1, 1]);
        assert!(result.is_err());
    }
}
