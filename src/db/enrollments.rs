use rusqlite::{params, Connection};

pub(crate) const SCHEMA_STUDENT_SUBJECTS: &str = "CREATE TABLE IF NOT EXISTS StudentSubjects (
    student_id INTEGER NOT NULL,
    subject_id INTEGER NOT NULL,
    PRIMARY KEY (student_id, subject_id),
    FOREIGN KEY (student_id) REFERENCES Students(id),
    FOREIGN KEY (subject_id) REFERENCES Subjects(id)
)";
// The composite key makes a repeated pair a no-op.
const INSERT_ENROLLMENT: &str = "INSERT OR IGNORE INTO StudentSubjects (student_id, subject_id) VALUES (?1, ?2)";
const COUNT_ENROLLMENTS: &str = "SELECT COUNT(*) FROM StudentSubjects";

/// SQL access to the `StudentSubjects` join table.
pub struct Enrollments<'a> {
    conn: &'a Connection,
}

impl<'a> Enrollments<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Links a student to a subject. Returns `false` when the pair already existed.
    pub fn insert(&self, student_id: i64, subject_id: i64) -> rusqlite::Result<bool> {
        let inserted = self.conn.execute(INSERT_ENROLLMENT, params![student_id, subject_id])?;
        Ok(inserted > 0)
    }

    pub fn count(&self) -> rusqlite::Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_ENROLLMENTS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
