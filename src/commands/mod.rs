//! Command-line interface of the roster binary.
//!
//! Every subcommand except `init` and `migrations` runs against a
//! [`RosterStore`] opened from the resolved [`StoreConfig`].

pub mod demo;
pub mod enroll;
pub mod export;
pub mod init;
pub mod migrations;
pub mod roster;
pub mod student;
pub mod subject;

use crate::libs::config::{Config, StoreConfig};
use crate::libs::messages::Message;
use crate::libs::roster::RosterStore;
use crate::msg_print;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add and list subjects", arg_required_else_help = true)]
    Subject(subject::SubjectArgs),
    #[command(about = "Add and list students", arg_required_else_help = true)]
    Student(student::StudentArgs),
    #[command(about = "Enroll a student in a subject", arg_required_else_help = true)]
    Enroll(enroll::EnrollArgs),
    #[command(about = "Print every subject with its enrolled students")]
    Roster,
    #[command(about = "Create the sample roster and print it")]
    Demo,
    #[command(about = "Export the roster to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema version", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print the database path before running the command
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let Cli { db, verbose, command } = self;
        match command {
            Commands::Init(args) => init::cmd(args),
            command => run_with_store_config(command, db, verbose),
        }
    }
}

fn run_with_store_config(command: Commands, db: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = Config::read()?;
    let store_config: StoreConfig = config.store_config(db)?;
    if verbose {
        msg_print!(Message::UsingDatabase(store_config.database_path.display().to_string()));
    }

    if let Commands::Migrations(args) = command {
        return migrations::cmd(args, &store_config);
    }

    let mut store = RosterStore::open(&store_config)?;
    match command {
        Commands::Subject(args) => subject::cmd(args, &mut store, config.default_capacity),
        Commands::Student(args) => student::cmd(args, &mut store),
        Commands::Enroll(args) => enroll::cmd(args, &mut store),
        Commands::Roster => roster::cmd(&store),
        Commands::Demo => demo::cmd(&mut store),
        Commands::Export(args) => export::cmd(args, &store),
        Commands::Init(_) | Commands::Migrations(_) => Ok(()),
    }
}
