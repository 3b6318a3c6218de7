use crate::{
    libs::{
        messages::Message,
        roster::RosterStore,
        student::NewStudent,
        subject::Include,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    command: StudentCommand,
}

#[derive(Debug, Subcommand)]
enum StudentCommand {
    /// Add a new student
    Add {
        /// Student name
        name: String,
        /// Enrollment date: "now", YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS"
        #[arg(short, long, default_value = "now")]
        date: String,
    },
    /// List all students
    List,
    /// Show the subjects a student is enrolled in
    Subjects {
        /// Student ID
        id: i64,
    },
}

pub fn cmd(args: StudentArgs, store: &mut RosterStore) -> Result<()> {
    match args.command {
        StudentCommand::Add { name, date } => {
            let Some(enrollment_date) = parse_enrollment_date(&date) else {
                msg_bail_anyhow!(Message::InvalidEnrollmentDate(date));
            };
            let student = store.add_student(&NewStudent::new(&name, enrollment_date))?;
            msg_success!(Message::StudentAdded(student.id, student.name));
        }
        StudentCommand::List => {
            let students = store.list_students()?;
            if students.is_empty() {
                msg_info!(Message::NoStudentsFound);
                return Ok(());
            }
            msg_print!(Message::StudentsHeader, true);
            View::students(&students);
        }
        StudentCommand::Subjects { id } => {
            let Some(schedule) = store.get_student(id, Include::Related)? else {
                msg_info!(Message::StudentNotFound(id));
                return Ok(());
            };
            if schedule.subjects.is_empty() {
                msg_info!(Message::NoSubjectsForStudent(schedule.student.name));
                return Ok(());
            }
            msg_print!(Message::SubjectsHeader, true);
            View::subject_list(&schedule.subjects);
        }
    }
    Ok(())
}

/// Accepts `now`, `YYYY-MM-DD` (midnight) or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_enrollment_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("now") {
        return Some(Local::now().naive_local());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(date_time);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
}
