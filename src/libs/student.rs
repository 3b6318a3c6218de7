use super::subject::Subject;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub enrollment_date: NaiveDateTime,
}

/// Input for [`crate::libs::roster::RosterStore::add_student`].
///
/// The id is assigned by the store, so it is not part of the input.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub enrollment_date: NaiveDateTime,
}

impl NewStudent {
    pub fn new(name: &str, enrollment_date: NaiveDateTime) -> Self {
        NewStudent {
            name: name.to_string(),
            enrollment_date,
        }
    }
}

/// A student together with the subjects it is enrolled in.
#[derive(Debug, Clone, Serialize)]
pub struct StudentSchedule {
    pub student: Student,
    pub subjects: Vec<Subject>,
}
