use crate::{
    libs::{
        messages::Message,
        roster::{EnrollOutcome, RosterStore},
        subject::Include,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EnrollArgs {
    /// Student ID
    student_id: i64,
    /// Subject ID
    subject_id: i64,
}

pub fn cmd(args: EnrollArgs, store: &mut RosterStore) -> Result<()> {
    let outcome = store.enroll_student_in_subject(args.student_id, args.subject_id)?;

    let names = || -> Result<(String, String)> {
        let student = store.get_student(args.student_id, Include::None)?.map(|s| s.student.name).unwrap_or_default();
        let subject = store.get_subject(args.subject_id, Include::None)?.map(|s| s.subject.title).unwrap_or_default();
        Ok((student, subject))
    };

    match outcome {
        EnrollOutcome::Enrolled => {
            let (student, subject) = names()?;
            msg_success!(Message::Enrolled(student, subject));
        }
        EnrollOutcome::AlreadyEnrolled => {
            let (student, subject) = names()?;
            msg_info!(Message::AlreadyEnrolled(student, subject));
        }
        EnrollOutcome::StudentNotFound | EnrollOutcome::SubjectNotFound => {
            msg_warning!(Message::EnrollmentSkipped(args.student_id, args.subject_id));
        }
    }
    Ok(())
}
