use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        roster::RosterStore,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, store: &RosterStore) -> Result<()> {
    msg_info!(Message::ExportingRoster(format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&store.list_subjects()?)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
