//! SQLite persistence layer.
//!
//! [`db::Db`] opens a connection, turns on foreign keys and applies the
//! schema through [`migrations`]. The table modules hold the SQL for one
//! table each and borrow the connection owned by
//! [`crate::libs::roster::RosterStore`].
//!
//! ## Tables
//!
//! - `Students(id, name, enrollment_date)`
//! - `Subjects(id, title, maximum_capacity)`
//! - `StudentSubjects(student_id, subject_id)`, keyed by the pair

pub mod db;
pub mod enrollments;
pub mod migrations;
pub mod students;
pub mod subjects;
