use serde::Serialize;
use std::path::{Path, PathBuf};

/// One line-oriented input file, captured once when the directory is listed
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct InputFile {
    /// File name, the sort key
    pub name: String,
    pub path: PathBuf,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Local tally for one file or one worker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub valid: u64,
    pub invalid: u64,
}

impl Tally {
    pub fn record(&mut self, is_valid: bool) {
        if is_valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }

    pub fn lines(&self) -> u64 {
        self.valid + self.invalid
    }
}

impl std::ops::AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        self.valid += other.valid;
        self.invalid += other.invalid;
    }
}

/// A file its worker could not open or finish reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// What a worker hands back when it terminates
#[derive(Debug, Clone, Default)]
pub struct WorkerOutcome {
    pub worker_id: usize,
    /// Files in the slice that were read to the end
    pub files_read: usize,
    /// Lines this worker published to the shared counters
    pub tally: Tally,
    pub failures: Vec<FileFailure>,
}

/// Final result of one run, built once after every worker has been joined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub workers: usize,
    pub elapsed_ms: u64,
    pub valid: u64,
    pub invalid: u64,
    pub files_total: usize,
    pub files_read: usize,
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    pub fn lines(&self) -> u64 {
        self.valid + self.invalid
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_file_name_from_path() {
        let file = InputFile::new("dados/cpfs_01.txt");
        assert_eq!(file.name, "cpfs_01.txt");
        assert_eq!(file.path(), Path::new("dados/cpfs_01.txt"));
    }

    #[test]
    fn test_input_files_sort_by_name() {
        let mut files = vec![
            InputFile::new("x/cpfs_10.txt"),
            InputFile::new("x/cpfs_02.txt"),
            InputFile::new("x/cpfs_01.txt"),
        ];
        files.sort();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["cpfs_01.txt", "cpfs_02.txt", "cpfs_10.txt"]);
    }

    #[test]
    fn test_tally_record_and_add() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(false);
        assert_eq!(tally, Tally { valid: 1, invalid: 2 });

        let mut total = Tally { valid: 10, invalid: 10 };
        total += tally;
        assert_eq!(total.lines(), 23);
    }
}
