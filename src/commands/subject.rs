use crate::{
    libs::{
        messages::Message,
        roster::RosterStore,
        subject::{Include, NewSubject},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SubjectArgs {
    #[command(subcommand)]
    command: SubjectCommand,
}

#[derive(Debug, Subcommand)]
enum SubjectCommand {
    /// Add a new subject
    Add {
        /// Subject title
        title: String,
        /// Advisory seat count; enrollments are not checked against it
        #[arg(short, long)]
        capacity: Option<i32>,
    },
    /// List all subjects with their occupancy
    List,
    /// Show the students enrolled in a subject
    Students {
        /// Subject ID
        id: i64,
    },
}

pub fn cmd(args: SubjectArgs, store: &mut RosterStore, default_capacity: i32) -> Result<()> {
    match args.command {
        SubjectCommand::Add { title, capacity } => {
            let subject = store.add_subject(&NewSubject::new(&title, capacity.unwrap_or(default_capacity)))?;
            msg_success!(Message::SubjectAdded(subject.id, subject.title));
        }
        SubjectCommand::List => {
            let rosters = store.list_subjects()?;
            if rosters.is_empty() {
                msg_info!(Message::NoSubjectsFound);
                return Ok(());
            }
            msg_print!(Message::SubjectsHeader, true);
            View::subjects(&rosters);
        }
        SubjectCommand::Students { id } => {
            let Some(roster) = store.get_subject(id, Include::Related)? else {
                msg_info!(Message::SubjectNotFound(id));
                return Ok(());
            };
            if roster.students.is_empty() {
                msg_info!(Message::NoStudentsForSubject(roster.subject.title));
                return Ok(());
            }
            msg_print!(Message::RosterSubject(roster.subject.title.clone()), true);
            View::students(&roster.students);
        }
    }
    Ok(())
}
