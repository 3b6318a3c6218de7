use super::student::Student;
use super::subject::{Subject, SubjectRoster};
use crate::libs::messages::Message;
use prettytable::{row, Table};
use std::io::{self, Write};

pub struct View {}

impl View {
    pub fn subjects(rosters: &[SubjectRoster]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CAPACITY", "ENROLLED"]);
        for roster in rosters {
            table.add_row(row![
                roster.subject.id,
                roster.subject.title,
                roster.subject.maximum_capacity,
                roster.occupancy()
            ]);
        }
        table.printstd();
    }

    pub fn subject_list(subjects: &[Subject]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CAPACITY"]);
        for subject in subjects {
            table.add_row(row![subject.id, subject.title, subject.maximum_capacity]);
        }
        table.printstd();
    }

    pub fn students(students: &[Student]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ENROLLMENT DATE"]);
        for student in students {
            table.add_row(row![
                student.id,
                student.name,
                student.enrollment_date.format("%Y-%m-%d %H:%M:%S")
            ]);
        }
        table.printstd();
    }

    /// Writes the plain roster listing: each subject title, then its students one per line.
    pub fn write_roster<W: Write>(out: &mut W, rosters: &[SubjectRoster]) -> io::Result<()> {
        for roster in rosters {
            writeln!(out, "{}", Message::RosterSubject(roster.subject.title.clone()))?;
            writeln!(out, "{}", Message::RosterEnrolledHeader)?;
            for student in &roster.students {
                writeln!(out, "{}", Message::RosterStudent(student.name.clone()))?;
            }
        }
        Ok(())
    }
}
