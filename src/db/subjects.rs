use crate::libs::student::Student;
use crate::libs::subject::{NewSubject, Subject, SubjectRoster};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const SCHEMA_SUBJECTS: &str = "CREATE TABLE IF NOT EXISTS Subjects (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    maximum_capacity INTEGER NOT NULL
)";
const INSERT_SUBJECT: &str = "INSERT INTO Subjects (title, maximum_capacity) VALUES (?1, ?2)";
const SELECT_ALL_SUBJECTS: &str = "SELECT id, title, maximum_capacity FROM Subjects ORDER BY id";
const SELECT_SUBJECT_BY_ID: &str = "SELECT id, title, maximum_capacity FROM Subjects WHERE id = ?1";
const SELECT_SUBJECTS_BY_STUDENT: &str = "
    SELECT s.id, s.title, s.maximum_capacity FROM Subjects s
    JOIN StudentSubjects ss ON s.id = ss.subject_id
    WHERE ss.student_id = ?1
    ORDER BY s.id
";
// One row per (subject, student) pair; subjects without students yield a
// single row with NULL student columns.
const SELECT_ROSTER: &str = "
    SELECT s.id, s.title, s.maximum_capacity, st.id, st.name, st.enrollment_date
    FROM Subjects s
    LEFT JOIN StudentSubjects ss ON s.id = ss.subject_id
    LEFT JOIN Students st ON st.id = ss.student_id
    ORDER BY s.id, st.id
";

fn subject_from_row(row: &Row) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: row.get(0)?,
        title: row.get(1)?,
        maximum_capacity: row.get(2)?,
    })
}

/// SQL access to the `Subjects` table.
pub struct Subjects<'a> {
    conn: &'a Connection,
}

impl<'a> Subjects<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a subject and returns it with its assigned id.
    pub fn insert(&self, subject: &NewSubject) -> rusqlite::Result<Subject> {
        self.conn.execute(INSERT_SUBJECT, params![subject.title, subject.maximum_capacity])?;
        Ok(Subject {
            id: self.conn.last_insert_rowid(),
            title: subject.title.clone(),
            maximum_capacity: subject.maximum_capacity,
        })
    }

    pub fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<Subject>> {
        self.conn.query_row(SELECT_SUBJECT_BY_ID, params![id], subject_from_row).optional()
    }

    pub fn list(&self) -> rusqlite::Result<Vec<Subject>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SUBJECTS)?;
        let subjects = stmt.query_map([], subject_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(subjects)
    }

    /// Subjects a student is enrolled in; empty for unknown students.
    pub fn get_by_student(&self, student_id: i64) -> rusqlite::Result<Vec<Subject>> {
        let mut stmt = self.conn.prepare(SELECT_SUBJECTS_BY_STUDENT)?;
        let subjects = stmt.query_map(params![student_id], subject_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(subjects)
    }

    /// Every subject with its students, loaded in a single join.
    pub fn roster(&self) -> rusqlite::Result<Vec<SubjectRoster>> {
        let mut stmt = self.conn.prepare(SELECT_ROSTER)?;
        let mut rows = stmt.query([])?;

        let mut rosters: Vec<SubjectRoster> = Vec::new();
        while let Some(row) = rows.next()? {
            let subject = subject_from_row(row)?;
            let student_id: Option<i64> = row.get(3)?;

            if rosters.last().map(|r| r.subject.id) != Some(subject.id) {
                rosters.push(SubjectRoster {
                    subject,
                    students: Vec::new(),
                });
            }

            if let (Some(id), Some(roster)) = (student_id, rosters.last_mut()) {
                roster.students.push(Student {
                    id,
                    name: row.get(4)?,
                    enrollment_date: row.get(5)?,
                });
            }
        }

        Ok(rosters)
    }
}
