//! Seeds the sample roster and prints it.

use crate::{
    libs::{
        messages::Message,
        roster::RosterStore,
        student::NewStudent,
        subject::NewSubject,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd(store: &mut RosterStore) -> Result<()> {
    seed(store)?;
    msg_success!(Message::DemoSeeded);
    msg_info!(Message::EnrollmentCount(store.enrollment_count()?));
    super::roster::cmd(store)
}

/// Adds Mathematics (capacity 30) and enrolls Alice and Bob in it.
pub fn seed(store: &mut RosterStore) -> Result<()> {
    let subject = store.add_subject(&NewSubject::new("Mathematics", 30))?;

    let now = Local::now().naive_local();
    let alice = store.add_student(&NewStudent::new("Alice", now))?;
    let bob = store.add_student(&NewStudent::new("Bob", now))?;

    store.enroll_student_in_subject(alice.id, subject.id)?;
    store.enroll_student_in_subject(bob.id, subject.id)?;
    Ok(())
}
