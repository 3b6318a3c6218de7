use crate::libs::{roster::RosterStore, view::View};
use anyhow::Result;
use std::io;

/// Prints every subject followed by its enrolled students.
pub fn cmd(store: &RosterStore) -> Result<()> {
    let rosters = store.list_subjects()?;
    let stdout = io::stdout();
    View::write_roster(&mut stdout.lock(), &rosters)?;
    Ok(())
}
