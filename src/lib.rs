//! # Roster
//!
//! Students, subjects and the many-to-many enrollments between them, kept in
//! a local SQLite database.
//!
//! The library entry point is [`libs::roster::RosterStore`]; the `roster`
//! binary wraps it in a small CLI.
//!
//! ```rust,no_run
//! use roster::libs::config::StoreConfig;
//! use roster::libs::roster::RosterStore;
//!
//! let store = RosterStore::open(&StoreConfig::new("school.db"))?;
//! for roster in store.list_subjects()? {
//!     println!("{} ({})", roster.subject.title, roster.occupancy());
//! }
//! # Ok::<(), roster::libs::error::StorageError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
