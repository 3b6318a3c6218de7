//! Library modules: the roster store, its entities, configuration, messages
//! and presentation helpers.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod messages;
pub mod roster;
pub mod student;
pub mod subject;
pub mod view;
