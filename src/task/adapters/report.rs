//! CSV export of task view-models.

use crate::task::domain::{TaskViewModel, long_date};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while producing a CSV report.
#[derive(Debug, Error)]
pub enum TaskExportError {
    /// A record could not be written.
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The buffered output could not be flushed.
    #[error("failed to flush CSV output: {0}")]
    Flush(String),
}

#[derive(Serialize)]
struct ReportRow<'a> {
    id: i64,
    name: &'a str,
    description: &'a str,
    status: &'a str,
    priority: &'a str,
    created: &'a str,
}

impl<'a> From<&'a TaskViewModel> for ReportRow<'a> {
    fn from(view: &'a TaskViewModel) -> Self {
        Self {
            id: view.id,
            name: &view.name,
            description: &view.description,
            status: &view.is_done,
            priority: &view.priority,
            created: &view.created,
        }
    }
}

const HEADER: [&str; 6] = ["Id", "Name", "Description", "Status", "Priority", "Created"];

/// Serializes tasks into CSV bytes, one header row followed by one row per
/// task.
///
/// The header is written even when `tasks` is empty.
///
/// # Errors
///
/// Returns [`TaskExportError`] when a record cannot be encoded.
pub fn write_task_report(tasks: &[TaskViewModel]) -> Result<Vec<u8>, TaskExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for task in tasks {
        writer.serialize(ReportRow::from(task))?;
    }
    writer
        .into_inner()
        .map_err(|err| TaskExportError::Flush(err.to_string()))
}

/// Returns the attachment file name for a report covering `date`.
#[must_use]
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Statistics for {}.csv", long_date(date))
}
