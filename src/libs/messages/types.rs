/// Every user-facing message of the roster CLI.
///
/// Text lives in the `Display` impl in `display.rs`; call sites only pick a
/// variant and its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === SUBJECT MESSAGES ===
    SubjectAdded(i64, String),
    SubjectNotFound(i64),
    SubjectsHeader,
    NoSubjectsFound,
    NoStudentsForSubject(String),

    // === STUDENT MESSAGES ===
    StudentAdded(i64, String),
    StudentNotFound(i64),
    StudentsHeader,
    NoStudentsFound,
    NoSubjectsForStudent(String),
    InvalidEnrollmentDate(String),

    // === ENROLLMENT MESSAGES ===
    Enrolled(String, String),
    AlreadyEnrolled(String, String),
    EnrollmentSkipped(i64, i64),
    EnrollmentCount(usize),

    // === ROSTER LISTING ===
    RosterSubject(String),
    RosterEnrolledHeader,
    RosterStudent(String),
    DemoSeeded,

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved(String),
    PromptDatabasePath,
    PromptDefaultCapacity,
    UsingDatabase(String),

    // === EXPORT MESSAGES ===
    ExportingRoster(String),
    ExportCompleted(String),

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String),
}
