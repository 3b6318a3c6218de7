//! The roster store: students, subjects and the enrollments between them.
//!
//! [`RosterStore`] owns one SQLite connection for its whole lifetime. It is
//! opened from an explicit [`StoreConfig`], creates the database file and the
//! schema on first use, and exposes fully materialized values. Relations are
//! never loaded behind the caller's back: the `list_*` operations that return
//! a relation say so in their name, and the single-row lookups take an
//! [`Include`] argument.
//!
//! ## Not-found handling
//!
//! - Lookups by id return `Option`.
//! - Relation queries for an unknown id return an empty vector.
//! - Enrolling with an unknown id writes nothing and reports it through
//!   [`EnrollOutcome`], never through an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use roster::libs::config::StoreConfig;
//! use roster::libs::roster::RosterStore;
//! use roster::libs::student::NewStudent;
//! use roster::libs::subject::NewSubject;
//!
//! let mut store = RosterStore::open(&StoreConfig::new("school.db"))?;
//! let maths = store.add_subject(&NewSubject::new("Mathematics", 30))?;
//! let alice = store.add_student(&NewStudent::new("Alice", Local::now().naive_local()))?;
//! store.enroll_student_in_subject(alice.id, maths.id)?;
//!
//! for roster in store.list_subjects()? {
//!     println!("{}: {:?}", roster.subject.title, roster.student_names());
//! }
//! # Ok::<(), roster::libs::error::StorageError>(())
//! ```

use super::config::StoreConfig;
use super::error::StorageResult;
use super::student::{NewStudent, Student, StudentSchedule};
use super::subject::{Include, NewSubject, Subject, SubjectRoster};
use crate::db::db::Db;
use crate::db::enrollments::Enrollments;
use crate::db::students::Students;
use crate::db::subjects::Subjects;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Result of [`RosterStore::enroll_student_in_subject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// A new join row was written.
    Enrolled,
    /// The pair already existed; nothing was written.
    AlreadyEnrolled,
    /// No student with that id; nothing was written.
    StudentNotFound,
    /// No subject with that id; nothing was written.
    SubjectNotFound,
}

impl EnrollOutcome {
    /// Whether the student ends up enrolled in the subject.
    pub fn is_enrolled(self) -> bool {
        matches!(self, EnrollOutcome::Enrolled | EnrollOutcome::AlreadyEnrolled)
    }
}

/// Handle to one roster database; every operation goes through its single connection.
pub struct RosterStore {
    conn: Connection,
    location: Option<PathBuf>,
}

impl RosterStore {
    /// Opens the database named by `config`, creating file and schema if absent.
    pub fn open(config: &StoreConfig) -> StorageResult<Self> {
        let db = Db::open(&config.database_path)?;
        tracing::info!(path = %config.database_path.display(), "roster store opened");
        Ok(Self {
            conn: db.conn,
            location: Some(config.database_path.clone()),
        })
    }

    /// A throwaway store backed by an in-memory database.
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Db::open_in_memory()?;
        Ok(Self {
            conn: db.conn,
            location: None,
        })
    }

    /// Database file behind this store; `None` for in-memory stores.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Inserts a subject and returns it with its assigned id.
    pub fn add_subject(&mut self, subject: &NewSubject) -> StorageResult<Subject> {
        let subject = Subjects::new(&self.conn).insert(subject)?;
        tracing::debug!(subject_id = subject.id, title = %subject.title, "subject added");
        Ok(subject)
    }

    /// Inserts a student and returns it with its assigned id.
    pub fn add_student(&mut self, student: &NewStudent) -> StorageResult<Student> {
        let student = Students::new(&self.conn).insert(student)?;
        tracing::debug!(student_id = student.id, name = %student.name, "student added");
        Ok(student)
    }

    /// Enrolls a student in a subject.
    ///
    /// Both ids are looked up in the same transaction as the insert. A missing
    /// side makes the call a no-op; enrolling an existing pair again is also a
    /// no-op. Capacity is not checked.
    pub fn enroll_student_in_subject(&mut self, student_id: i64, subject_id: i64) -> StorageResult<EnrollOutcome> {
        let tx = self.conn.transaction()?;

        let outcome = if Students::new(&tx).get_by_id(student_id)?.is_none() {
            EnrollOutcome::StudentNotFound
        } else if Subjects::new(&tx).get_by_id(subject_id)?.is_none() {
            EnrollOutcome::SubjectNotFound
        } else if Enrollments::new(&tx).insert(student_id, subject_id)? {
            EnrollOutcome::Enrolled
        } else {
            EnrollOutcome::AlreadyEnrolled
        };

        tx.commit()?;
        tracing::debug!(student_id, subject_id, outcome = ?outcome, "enroll");
        Ok(outcome)
    }

    /// Every subject with its students, subjects in insertion order.
    pub fn list_subjects(&self) -> StorageResult<Vec<SubjectRoster>> {
        self.list_subjects_with(Include::Related)
    }

    /// Like [`Self::list_subjects`], with relation loading made explicit.
    pub fn list_subjects_with(&self, include: Include) -> StorageResult<Vec<SubjectRoster>> {
        let subjects = Subjects::new(&self.conn);
        let rosters = match include {
            Include::Related => subjects.roster()?,
            Include::None => subjects
                .list()?
                .into_iter()
                .map(|subject| SubjectRoster {
                    subject,
                    students: Vec::new(),
                })
                .collect(),
        };
        Ok(rosters)
    }

    /// Students enrolled in `subject_id`; empty when the subject does not exist.
    pub fn list_students_for_subject(&self, subject_id: i64) -> StorageResult<Vec<Student>> {
        Ok(Students::new(&self.conn).get_by_subject(subject_id)?)
    }

    /// Subjects `student_id` is enrolled in; empty when the student does not exist.
    pub fn list_subjects_for_student(&self, student_id: i64) -> StorageResult<Vec<Subject>> {
        Ok(Subjects::new(&self.conn).get_by_student(student_id)?)
    }

    /// Every student in id order, without subjects.
    pub fn list_students(&self) -> StorageResult<Vec<Student>> {
        Ok(Students::new(&self.conn).list()?)
    }

    /// Looks a subject up by id, with its students when `include` is [`Include::Related`].
    pub fn get_subject(&self, id: i64, include: Include) -> StorageResult<Option<SubjectRoster>> {
        let Some(subject) = Subjects::new(&self.conn).get_by_id(id)? else {
            return Ok(None);
        };
        let students = match include {
            Include::Related => self.list_students_for_subject(id)?,
            Include::None => Vec::new(),
        };
        Ok(Some(SubjectRoster { subject, students }))
    }

    /// Looks a student up by id, with their subjects when `include` is [`Include::Related`].
    pub fn get_student(&self, id: i64, include: Include) -> StorageResult<Option<StudentSchedule>> {
        let Some(student) = Students::new(&self.conn).get_by_id(id)? else {
            return Ok(None);
        };
        let subjects = match include {
            Include::Related => self.list_subjects_for_student(id)?,
            Include::None => Vec::new(),
        };
        Ok(Some(StudentSchedule { student, subjects }))
    }

    /// Number of rows in the join table.
    pub fn enrollment_count(&self) -> StorageResult<usize> {
        Ok(Enrollments::new(&self.conn).count()?)
    }
}
