use super::counters::Counters;
use super::types::{FileFailure, InputFile, Tally, WorkerOutcome};
use crate::cpf;
use crate::parallel::{WorkSlice, WorkerProgress};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Processes one work slice: every line of every file, in slice order.
///
/// A file that cannot be opened or read is recorded and skipped; the worker
/// carries on with the rest of its slice. Lines read before a mid-file error
/// still count.
pub struct Worker<'a> {
    slice: &'a WorkSlice<'a, InputFile>,
    counters: &'a Counters,
    progress: Option<&'a WorkerProgress>,
}

impl<'a> Worker<'a> {
    pub fn new(slice: &'a WorkSlice<'a, InputFile>, counters: &'a Counters) -> Self {
        Self {
            slice,
            counters,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: &'a WorkerProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self) -> WorkerOutcome {
        let worker_id = self.slice.worker_id;
        let mut outcome = WorkerOutcome {
            worker_id,
            ..WorkerOutcome::default()
        };

        if self.slice.is_empty() {
            tracing::debug!("worker-{worker_id}: empty slice, nothing to do");
            return outcome;
        }

        tracing::debug!(
            "worker-{worker_id}: {} files starting at #{}",
            self.slice.len(),
            self.slice.offset
        );

        for file in self.slice.items {
            if let Some(progress) = self.progress {
                progress.start_file(worker_id, &file.name);
            }

            let mut tally = Tally::default();
            let result = process_file(file.path(), &mut tally);

            // Publish whatever was read, even when the file failed part way
            self.counters.publish(tally);
            outcome.tally += tally;

            match result {
                Ok(()) => {
                    outcome.files_read += 1;
                    tracing::trace!(
                        "worker-{worker_id}: {} -> {} valid, {} invalid",
                        file.name,
                        tally.valid,
                        tally.invalid
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", file.path.display(), e);
                    outcome.failures.push(FileFailure {
                        path: file.path.clone(),
                        error: e.to_string(),
                    });
                }
            }

            if let Some(progress) = self.progress {
                progress.finish_file(worker_id);
            }
        }

        outcome
    }
}

/// Classify every line of one file into `tally`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; bytes that are not valid UTF-8
/// are replaced rather than treated as a read error. On a read error the lines
/// already classified stay in `tally`.
pub fn process_file(path: &Path, tally: &mut Tally) -> io::Result<()> {
    let file = File::open(path)?;
    count_lines(BufReader::new(file), tally)
}

/// Line loop behind [`process_file`], over any buffered reader
pub fn count_lines<R: BufRead>(mut reader: R, tally: &mut Tally) -> io::Result<()> {
    let mut buffer = Vec::with_capacity(64);

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }

        for line in split_lines(&buffer) {
            tally.record(cpf::validate(&String::from_utf8_lossy(line)));
        }
    }
}

/// Split one `read_until(b'\n')` chunk into lines.
///
/// The chunk holds at most one `\n`, at its end. A `\r` right before the end
/// terminates the last line and does not open an empty one.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}
