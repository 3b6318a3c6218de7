//! Configuration for the roster application.
//!
//! Two layers live here:
//!
//! - [`StoreConfig`] is the only thing [`crate::libs::roster::RosterStore`]
//!   needs: where the database file is. It is a plain value passed to the
//!   constructor; the store never reads files or environment variables.
//! - [`Config`] is the user's persisted preferences (`config.json` in the
//!   platform data directory). The CLI resolves a `StoreConfig` from it.
//!
//! ## Resolution order for the database path
//!
//! 1. `--db <PATH>` on the command line
//! 2. `ROSTER_DB_PATH` environment variable (a `.env` file is honoured)
//! 3. `database_path` in `config.json`
//! 4. `roster.db` inside the platform data directory
//!
//! ```rust,no_run
//! use roster::libs::config::Config;
//!
//! let config = Config::read()?;
//! let store_config = config.store_config(None)?;
//! println!("Using {}", store_config.database_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_PATH_ENV: &str = "ROSTER_DB_PATH";

/// Capacity used by `subject add` when `--capacity` is omitted.
pub const DEFAULT_CAPACITY: i32 = 30;

/// Where the roster database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

/// Persisted user preferences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    #[serde(default = "default_capacity")]
    pub default_capacity: i32,
}

fn default_capacity() -> i32 {
    DEFAULT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            default_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Reads `config.json` from the data directory, or the defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database location, see the module docs for the precedence.
    pub fn store_config(&self, cli_override: Option<PathBuf>) -> Result<StoreConfig> {
        if let Some(path) = cli_override {
            return Ok(StoreConfig::new(path));
        }
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(StoreConfig::new(path));
            }
        }
        if let Some(path) = &self.database_path {
            return Ok(StoreConfig::new(path.clone()));
        }

        Ok(StoreConfig::new(DataStorage::new().get_path(DB_FILE_NAME)?))
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let default_path = match &current.database_path {
            Some(path) => path.clone(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };

        msg_print!(Message::ConfigWizardHeader, true);

        let database_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default_path.display().to_string())
            .interact_text()?;

        let default_capacity: i32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCapacity.to_string())
            .default(current.default_capacity)
            .interact_text()?;

        Ok(Config {
            database_path: Some(PathBuf::from(database_path)),
            default_capacity,
        })
    }
}
