use crate::libs::student::{NewStudent, Student};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS Students (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    enrollment_date TIMESTAMP NOT NULL
)";
const INSERT_STUDENT: &str = "INSERT INTO Students (name, enrollment_date) VALUES (?1, ?2)";
const SELECT_ALL_STUDENTS: &str = "SELECT id, name, enrollment_date FROM Students ORDER BY id";
const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, enrollment_date FROM Students WHERE id = ?1";
const SELECT_STUDENTS_BY_SUBJECT: &str = "
    SELECT st.id, st.name, st.enrollment_date FROM Students st
    JOIN StudentSubjects ss ON st.id = ss.student_id
    WHERE ss.subject_id = ?1
    ORDER BY st.id
";

fn student_from_row(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        enrollment_date: row.get(2)?,
    })
}

/// SQL access to the `Students` table.
pub struct Students<'a> {
    conn: &'a Connection,
}

impl<'a> Students<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a student and returns it with its assigned id.
    pub fn insert(&self, student: &NewStudent) -> rusqlite::Result<Student> {
        self.conn.execute(INSERT_STUDENT, params![student.name, student.enrollment_date])?;
        Ok(Student {
            id: self.conn.last_insert_rowid(),
            name: student.name.clone(),
            enrollment_date: student.enrollment_date,
        })
    }

    pub fn get_by_id(&self, id: i64) -> rusqlite::Result<Option<Student>> {
        self.conn.query_row(SELECT_STUDENT_BY_ID, params![id], student_from_row).optional()
    }

    pub fn list(&self) -> rusqlite::Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STUDENTS)?;
        let students = stmt.query_map([], student_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    /// Students enrolled in a subject; empty for unknown subjects.
    pub fn get_by_subject(&self, subject_id: i64) -> rusqlite::Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_STUDENTS_BY_SUBJECT)?;
        let students = stmt.query_map(params![subject_id], student_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }
}
