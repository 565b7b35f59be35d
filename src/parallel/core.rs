use super::partition::WorkSlice;
use crate::error::{ScanError, ScanResult};

/// Runs one scoped thread per work slice and joins them all.
///
/// There is no shared queue: each thread gets its slice up front and owns it
/// until it returns. `execute` only comes back once every thread has been
/// joined, so anything the workers wrote through shared references is fully
/// visible to the caller afterwards.
pub struct SliceExecutor {
    thread_prefix: String,
}

impl SliceExecutor {
    pub fn new(thread_prefix: impl Into<String>) -> Self {
        Self {
            thread_prefix: thread_prefix.into(),
        }
    }

    /// Execute `worker` once per slice, each call on its own thread.
    ///
    /// Results come back in slice order. A panicking worker does not take the
    /// caller down; the run reports [`ScanError::WorkerPanicked`] once all
    /// the other workers have finished.
    pub fn execute<'a, T, R, F>(&self, slices: &[WorkSlice<'a, T>], worker: F) -> ScanResult<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&WorkSlice<'a, T>) -> R + Sync,
    {
        let worker = &worker;

        crossbeam::thread::scope(|s| -> ScanResult<Vec<R>> {
            let mut handles = Vec::with_capacity(slices.len());
            for slice in slices {
                let handle = s
                    .builder()
                    .name(format!("{}-{}", self.thread_prefix, slice.worker_id))
                    .spawn(move |_| worker(slice))
                    .map_err(ScanError::Spawn)?;
                handles.push(handle);
            }

            tracing::debug!("{} workers started", handles.len());

            // Join barrier: every worker is observed terminated before return
            handles
                .into_iter()
                .map(|handle| handle.join().map_err(|_| ScanError::WorkerPanicked))
                .collect()
        })
        .map_err(|_| ScanError::WorkerPanicked)?
    }
}

impl Default for SliceExecutor {
    fn default() -> Self {
        Self::new("worker")
    }
}
