//! Report artifacts
//!
//! Each run writes exactly one file named after its worker count:
//! `versao_1_thread.txt`, `versao_3_threads.txt`, and so on. The text form
//! holds three lines (elapsed time, valid count, invalid count); the JSON form
//! holds the whole [`RunReport`].

pub mod json;
pub mod text;

use crate::error::{ScanError, ScanResult};
use crate::scan::RunReport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Three plain lines: time, valid, invalid
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    pub fn render(&self, report: &RunReport) -> io::Result<String> {
        match self {
            ReportFormat::Text => Ok(text::render(report)),
            ReportFormat::Json => Ok(json::render(report)?),
        }
    }
}

/// `versao_{N}_thread{s}.{ext}`, with the plural `s` dropped for one worker
pub fn file_name(workers: usize, format: ReportFormat) -> String {
    let plural = if workers == 1 { "" } else { "s" };
    format!("versao_{workers}_thread{plural}.{}", format.extension())
}

/// Write `report` into `directory` and return the path written.
///
/// The directory is created if missing. An existing report for the same
/// worker count is overwritten.
pub fn write_report(report: &RunReport, directory: &Path, format: ReportFormat) -> ScanResult<PathBuf> {
    let path = directory.join(file_name(report.workers, format));
    format
        .render(report)
        .and_then(|content| {
            fs::create_dir_all(directory)?;
            fs::write(&path, content)
        })
        .map_err(|source| ScanError::Report {
            path: path.clone(),
            source,
        })?;

    tracing::debug!("Report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(workers: usize) -> RunReport {
        RunReport {
            workers,
            elapsed_ms: 12,
            valid: 150,
            invalid: 150,
            files_total: 30,
            files_read: 30,
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_file_names_encode_worker_count() {
        assert_eq!(file_name(1, ReportFormat::Text), "versao_1_thread.txt");
        assert_eq!(file_name(3, ReportFormat::Text), "versao_3_threads.txt");
        assert_eq!(file_name(30, ReportFormat::Text), "versao_30_threads.txt");
        assert_eq!(file_name(3, ReportFormat::Json), "versao_3_threads.json");
    }

    #[test]
    fn test_write_text_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_report(&sample(3), temp_dir.path(), ReportFormat::Text).unwrap();

        assert_eq!(path, temp_dir.path().join("versao_3_threads.txt"));
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_write_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("out").join("reports");
        let path = write_report(&sample(1), &nested, ReportFormat::Json).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = write_report(&sample(1), &blocker, ReportFormat::Text);
        assert!(matches!(result, Err(ScanError::Report { .. })));
    }
}
