use super::student::Student;
use serde::{Deserialize, Serialize};

/// A persisted subject row.
///
/// `maximum_capacity` is advisory. Nothing in the store compares it with the
/// number of enrolled students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub title: String,
    pub maximum_capacity: i32,
}

/// Input for [`crate::libs::roster::RosterStore::add_subject`].
#[derive(Debug, Clone)]
pub struct NewSubject {
    pub title: String,
    pub maximum_capacity: i32,
}

impl NewSubject {
    pub fn new(title: &str, maximum_capacity: i32) -> Self {
        NewSubject {
            title: title.to_string(),
            maximum_capacity,
        }
    }
}

/// A subject together with its enrolled students.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectRoster {
    pub subject: Subject,
    pub students: Vec<Student>,
}

impl SubjectRoster {
    /// Names of the enrolled students, in roster order.
    pub fn student_names(&self) -> Vec<&str> {
        self.students.iter().map(|s| s.name.as_str()).collect()
    }

    /// Occupancy as shown in listings, e.g. `2/30`.
    pub fn occupancy(&self) -> String {
        format!("{}/{}", self.students.len(), self.subject.maximum_capacity)
    }
}

/// Which side of the many-to-many relation a lookup should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Include {
    /// Only the requested rows; relation sets stay empty.
    #[default]
    None,
    /// Load the related rows through `StudentSubjects`.
    Related,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id,
            name: name.to_string(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn occupancy_is_not_capped_by_capacity() {
        let roster = SubjectRoster {
            subject: Subject {
                id: 1,
                title: "Chemistry".to_string(),
                maximum_capacity: 1,
            },
            students: vec![student(1, "Alice"), student(2, "Bob")],
        };

        assert_eq!(roster.occupancy(), "2/1");
        assert_eq!(roster.student_names(), vec!["Alice", "Bob"]);
    }
}
