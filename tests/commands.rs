#[cfg(test)]
mod tests {
    use clap::Parser;
    use roster::commands::Cli;
    use roster::db::migrations::MigrationManager;
    use roster::libs::config::StoreConfig;
    use roster::libs::roster::RosterStore;
    use std::env;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temp dir so no real config is read.
    struct CommandTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl CommandTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("school").join("roster.db")
        }

        fn run(&self, args: &[&str]) -> anyhow::Result<()> {
            let db = self.db_path().display().to_string();
            let mut argv = vec!["roster", "--db", db.as_str()];
            argv.extend_from_slice(args);
            Cli::parse_from(argv).run()
        }
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            env::set_var("HOME", temp_dir.path());
            env::set_var("LOCALAPPDATA", temp_dir.path());
            CommandTestContext {
                temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_migration_status_leaves_missing_file_alone(ctx: &mut CommandTestContext) {
        ctx.run(&["migrations", "status"]).unwrap();
        ctx.run(&["migrations", "history"]).unwrap();

        assert!(!ctx.db_path().exists());
        assert!(!ctx.db_path().parent().unwrap().exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_migration_status_on_existing_file(ctx: &mut CommandTestContext) {
        RosterStore::open(&StoreConfig::new(ctx.db_path())).unwrap();
        let size = std::fs::metadata(ctx.db_path()).unwrap().len();

        ctx.run(&["migrations", "status"]).unwrap();
        ctx.run(&["migrations", "history"]).unwrap();

        assert_eq!(std::fs::metadata(ctx.db_path()).unwrap().len(), size);
        assert!(MigrationManager::new().latest_version() > 0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_unknown_ids_are_not_errors(ctx: &mut CommandTestContext) {
        ctx.run(&["subject", "students", "42"]).unwrap();
        ctx.run(&["student", "subjects", "42"]).unwrap();
        ctx.run(&["enroll", "42", "43"]).unwrap();
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_demo_then_lookups(ctx: &mut CommandTestContext) {
        ctx.run(&["demo"]).unwrap();
        ctx.run(&["subject", "students", "1"]).unwrap();
        ctx.run(&["student", "subjects", "2"]).unwrap();

        let store = RosterStore::open(&StoreConfig::new(ctx.db_path())).unwrap();
        assert_eq!(store.enrollment_count().unwrap(), 2);
    }
}
