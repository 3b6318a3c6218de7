//! Roster export to CSV and JSON.
//!
//! CSV has one row per enrolled (subject, student) pair. A subject without
//! students still gets one row, with the student columns left empty, so the
//! file lists every subject. JSON mirrors [`RosterStore::list_subjects`]
//! with an export timestamp.
//!
//! [`RosterStore::list_subjects`]: crate::libs::roster::RosterStore::list_subjects

use super::subject::SubjectRoster;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per enrollment
    Csv,
    /// The full roster as a JSON document
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub subject_id: i64,
    pub subject_title: String,
    pub maximum_capacity: i32,
    pub student_id: Option<i64>,
    pub student_name: Option<String>,
    pub enrollment_date: Option<String>,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    export_date: String,
    subjects: &'a [SubjectRoster],
}

/// Flattens rosters into CSV rows.
pub fn export_rows(rosters: &[SubjectRoster]) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for roster in rosters {
        let subject = &roster.subject;
        if roster.students.is_empty() {
            rows.push(ExportRow {
                subject_id: subject.id,
                subject_title: subject.title.clone(),
                maximum_capacity: subject.maximum_capacity,
                student_id: None,
                student_name: None,
                enrollment_date: None,
            });
            continue;
        }
        for student in &roster.students {
            rows.push(ExportRow {
                subject_id: subject.id,
                subject_title: subject.title.clone(),
                maximum_capacity: subject.maximum_capacity,
                student_id: Some(student.id),
                student_name: Some(student.name.clone()),
                enrollment_date: Some(student.enrollment_date.format("%Y-%m-%d %H:%M:%S").to_string()),
            });
        }
    }
    rows
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is `roster_export_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "roster_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, rosters: &[SubjectRoster]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&self.output_path)?;
                for row in export_rows(rosters) {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let document = ExportDocument {
                    export_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                    subjects: rosters,
                };
                let json = serde_json::to_string_pretty(&document)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        tracing::debug!(path = %self.output_path.display(), format = ?self.format, subjects = rosters.len(), "roster exported");
        Ok(())
    }
}
