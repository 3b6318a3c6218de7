//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SUBJECT MESSAGES ===
            Message::SubjectAdded(id, title) => format!("Subject '{}' added with ID {}", title, id),
            Message::SubjectNotFound(id) => format!("Subject with ID {} not found.", id),
            Message::SubjectsHeader => "Subjects:".to_string(),
            Message::NoSubjectsFound => "No subjects found.".to_string(),
            Message::NoStudentsForSubject(title) => format!("No students enrolled in '{}'.", title),

            // === STUDENT MESSAGES ===
            Message::StudentAdded(id, name) => format!("Student '{}' added with ID {}", name, id),
            Message::StudentNotFound(id) => format!("Student with ID {} not found.", id),
            Message::StudentsHeader => "Students:".to_string(),
            Message::NoStudentsFound => "No students found.".to_string(),
            Message::NoSubjectsForStudent(name) => format!("'{}' is not enrolled in any subject.", name),
            Message::InvalidEnrollmentDate(value) => {
                format!("Invalid enrollment date '{}'. Use 'now', YYYY-MM-DD or YYYY-MM-DD HH:MM:SS.", value)
            }

            // === ENROLLMENT MESSAGES ===
            Message::Enrolled(name, title) => format!("'{}' enrolled in '{}'", name, title),
            Message::AlreadyEnrolled(name, title) => format!("'{}' is already enrolled in '{}'", name, title),
            Message::EnrollmentSkipped(student_id, subject_id) => {
                format!("Nothing enrolled: student {} or subject {} does not exist.", student_id, subject_id)
            }
            Message::EnrollmentCount(count) => format!("{} enrollment(s) recorded.", count),

            // === ROSTER LISTING ===
            Message::RosterSubject(title) => format!("Subject: {}", title),
            Message::RosterEnrolledHeader => "Enrolled Students:".to_string(),
            Message::RosterStudent(name) => format!("- {}", name),
            Message::DemoSeeded => "Demo data created: Mathematics with Alice and Bob.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Roster configuration".to_string(),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptDefaultCapacity => "Default subject capacity".to_string(),
            Message::UsingDatabase(path) => format!("Using database {}", path),

            // === EXPORT MESSAGES ===
            Message::ExportingRoster(format) => format!("Exporting roster as {}...", format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration.".to_string(),
            Message::DatabaseUpToDate => "Database is up to date.".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
        };
        write!(f, "{}", text)
    }
}
