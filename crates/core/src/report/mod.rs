//! CSV report writer.
//!
//! Layout: a header `,name,summary,info`, then one row per archive with its
//! zero-based row index, file name, verdict JSON and statistics JSON. The two
//! JSON cells are empty when the archive could not be evaluated.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::services::batch::ReportRow;

/// Default report file name, written relative to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "report.csv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize report cell: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `rows` as CSV to the file at `path`, replacing it.
pub fn write_csv(rows: &[ReportRow], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let writer = csv::Writer::from_path(path)?;
    write_rows(writer, rows)
}

/// Write `rows` as CSV to any writer.
pub fn write_csv_to<W: Write>(rows: &[ReportRow], out: W) -> Result<(), ReportError> {
    write_rows(csv::Writer::from_writer(out), rows)
}

fn write_rows<W: Write>(
    mut writer: csv::Writer<W>,
    rows: &[ReportRow],
) -> Result<(), ReportError> {
    writer.write_record(["", "name", "summary", "info"])?;
    for (idx, row) in rows.iter().enumerate() {
        let (summary, info) = match &row.evaluation {
            Some(eval) => {
                (serde_json::to_string(&eval.verdict)?, serde_json::to_string(&eval.stats)?)
            }
            None => (String::new(), String::new()),
        };
        writer.write_record([idx.to_string(), row.name.clone(), summary, info])?;
    }
    writer.flush()?;
    Ok(())
}
