use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::StoreConfig, messages::Message},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

/// Inspects the schema without migrating it. A missing file is reported as version 0 and left uncreated.
pub fn cmd(args: MigrationsArgs, store_config: &StoreConfig) -> Result<()> {
    let conn = Db::open_read_only(&store_config.database_path)?;
    let version = match &conn {
        Some(conn) => get_db_version(conn)?,
        None => 0,
    };

    match args.command {
        MigrationsCommand::Status => {
            msg_print!(Message::DatabaseVersion(version));
            let outdated = match &conn {
                Some(conn) => needs_migration(conn)?,
                None => true,
            };
            if outdated {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            msg_print!(Message::MigrationHistory, true);
            let Some(conn) = conn.filter(|_| version > 0) else {
                return Ok(());
            };
            for (version, name, applied_at) in MigrationManager::new().get_migration_history(&conn)? {
                msg_print!(Message::MigrationHistoryEntry(version, name, applied_at));
            }
        }
    }

    Ok(())
}
