use super::counters::Counters;
use super::listing::list_input_files;
use super::types::{RunReport, Tally, WorkerOutcome};
use super::worker::Worker;
use crate::error::{ScanError, ScanResult};
use crate::parallel::{SliceExecutor, WorkerProgress, partition};
use std::path::Path;
use std::time::Instant;

/// Settings that stay fixed across runs of one coordinator
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Extension of the input files, without the dot
    pub extension: String,
    /// Required file count; `None` accepts any non-zero count
    pub expected_files: Option<usize>,
    pub show_progress: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            expected_files: Some(30),
            show_progress: false,
        }
    }
}

/// Where a run is in its lifecycle, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Listing,
    Partitioning,
    Running,
    Joined,
    Reported,
}

/// Lists, partitions, runs and joins; produces one [`RunReport`] per run.
pub struct Coordinator {
    settings: ScanSettings,
    executor: SliceExecutor,
}

impl Coordinator {
    pub fn new(settings: ScanSettings) -> Self {
        Self {
            settings,
            executor: SliceExecutor::new("cpf-worker"),
        }
    }

    /// Validate every line of every input file in `directory` using
    /// `worker_count` threads.
    ///
    /// Fails before any worker starts when the directory cannot be listed,
    /// holds the wrong number of files or `worker_count` is zero. Unreadable
    /// files do not fail the run; they are listed on the report instead.
    pub fn run(&self, directory: &Path, worker_count: usize) -> ScanResult<RunReport> {
        if worker_count == 0 {
            return Err(ScanError::InvalidWorkerCount);
        }

        Self::transition(RunState::Listing, worker_count);
        let files = list_input_files(directory, &self.settings.extension)?;
        self.check_file_count(directory, files.len())?;

        Self::transition(RunState::Partitioning, worker_count);
        let slices = partition(&files, worker_count)?;
        for slice in &slices {
            tracing::debug!(
                "worker-{} gets files [{}, {})",
                slice.worker_id,
                slice.offset,
                slice.offset + slice.len()
            );
        }

        let sizes: Vec<usize> = slices.iter().map(|s| s.len()).collect();
        let progress = WorkerProgress::new(&sizes, self.settings.show_progress);
        let counters = Counters::new();

        Self::transition(RunState::Running, worker_count);
        let start_time = Instant::now();
        let outcomes = self.executor.execute(&slices, |slice| {
            Worker::new(slice, &counters).with_progress(&progress).run()
        });
        let elapsed = start_time.elapsed();
        progress.finish();
        let outcomes = outcomes?;

        Self::transition(RunState::Joined, worker_count);
        let totals = counters.snapshot();
        let elapsed_ms = elapsed.as_millis() as u64;
        let report = Self::build_report(worker_count, elapsed_ms, files.len(), totals, outcomes);

        Self::transition(RunState::Reported, worker_count);
        Ok(report)
    }

    fn check_file_count(&self, directory: &Path, found: usize) -> ScanResult<()> {
        match self.settings.expected_files {
            Some(expected) if found != expected => Err(ScanError::FileCount {
                directory: directory.to_path_buf(),
                extension: self.settings.extension.clone(),
                expected,
                found,
            }),
            None if found == 0 => Err(ScanError::NoInputFiles {
                directory: directory.to_path_buf(),
                extension: self.settings.extension.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn build_report(
        workers: usize,
        elapsed_ms: u64,
        files_total: usize,
        totals: Tally,
        outcomes: Vec<WorkerOutcome>,
    ) -> RunReport {
        let files_read = outcomes.iter().map(|o| o.files_read).sum();
        let failures = outcomes.into_iter().flat_map(|o| o.failures).collect();

        RunReport {
            workers,
            elapsed_ms,
            valid: totals.valid,
            invalid: totals.invalid,
            files_total,
            files_read,
            failures,
        }
    }

    fn transition(state: RunState, workers: usize) {
        tracing::debug!("run[{workers} workers]: {state:?}");
    }
}
