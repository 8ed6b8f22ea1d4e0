//! CSV export of time entries.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::Date;

use crate::domain::{Project, TimeEntry};

pub const CSV_HEADER: [&str; 7] = [
    "Date",
    "Project",
    "Client",
    "Hours",
    "Rate",
    "Earnings",
    "Description",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// `YYYY-MM-DD`, as used in export rows and file names.
pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month() as u8, date.day())
}

/// `time-tracker-export-<YYYY-MM-DD>.csv`
pub fn export_file_name(date: Date) -> String {
    format!("time-tracker-export-{}.csv", format_date(date))
}

/// Write `entries` as CSV, every field quoted.
///
/// The client column is looked up from `projects` by id and left empty when
/// the project has since been deleted.
pub fn write_csv<W: io::Write>(
    writer: W,
    entries: &[&TimeEntry],
    projects: &[Project],
) -> Result<W, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for entry in entries {
        let client = projects
            .iter()
            .find(|p| p.id == entry.project_id)
            .map(|p| p.client.as_str())
            .unwrap_or("");
        wtr.write_record([
            format_date(entry.start_time.date()).as_str(),
            entry.project_name.as_str(),
            client,
            format!("{:.2}", entry.hours()).as_str(),
            format!("{:.2}", entry.hourly_rate()).as_str(),
            format!("{:.2}", entry.earnings()).as_str(),
            entry.description.as_str(),
        ])?;
    }
    wtr.flush()?;
    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

pub fn to_csv_string(entries: &[&TimeEntry], projects: &[Project]) -> Result<String, ExportError> {
    let buf = write_csv(Vec::new(), entries, projects)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the export into `dir` under the date-stamped file name.
pub fn export_to_dir(
    dir: &Path,
    entries: &[&TimeEntry],
    projects: &[Project],
    today: Date,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(today));
    let file = std::fs::File::create(&path)?;
    write_csv(io::BufWriter::new(file), entries, projects)?;
    tracing::info!(path = %path.display(), rows = entries.len(), "exported time entries");
    Ok(path)
}
