//! CSV run records for benchmark comparisons
//!
//! One line per run, no header:
//! `<label>,<size>,<steps>,<elapsed seconds with 6 decimals>`

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One benchmark result line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Engine label, first CSV field
    pub label: String,
    /// Grid edge length
    pub size: usize,
    pub steps: usize,
    pub elapsed_secs: f64,
}

impl RunRecord {
    /// Format as a newline-terminated CSV line
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{:.6}\n",
            self.label, self.size, self.steps, self.elapsed_secs
        )
    }
}

/// Append `record` to the CSV file at `path`, creating it if absent
///
/// # Errors
///
/// Returns [`ReportError::Open`] if the file cannot be opened for appending
/// and [`ReportError::Write`] if the line cannot be written.
pub fn append_record(path: &Path, record: &RunRecord) -> Result<(), ReportError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(record.to_csv_line().as_bytes())
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
}
