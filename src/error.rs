//! Error taxonomy for a validation run
//!
//! Only the variants here abort a run. Unreadable input files are recovered
//! inside the worker that owns them and surface as [`FileFailure`] entries on
//! the report, and a line that fails the checksum is a classification result,
//! not an error.
//!
//! [`FileFailure`]: crate::scan::types::FileFailure

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The input directory does not hold the required number of files
    #[error("expected exactly {expected} .{extension} files in {}, found {found}", directory.display())]
    FileCount {
        directory: PathBuf,
        extension: String,
        expected: usize,
        found: usize,
    },

    #[error("no .{extension} files found in {}", directory.display())]
    NoInputFiles {
        directory: PathBuf,
        extension: String,
    },

    #[error("cannot list input directory {}: {source}", directory.display())]
    InputDirectory {
        directory: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("a worker thread panicked during the run")]
    WorkerPanicked,

    #[error("cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
