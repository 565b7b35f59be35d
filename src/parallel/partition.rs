use crate::error::{ScanError, ScanResult};

/// Contiguous run of work items owned by exactly one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSlice<'a, T> {
    /// Index of the worker that owns this slice
    pub worker_id: usize,
    /// Position of the first item in the full ordered input
    pub offset: usize,
    pub items: &'a [T],
}

impl<T> WorkSlice<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `items` into exactly `worker_count` contiguous slices.
///
/// Every slice but the last holds `items.len() / worker_count` items; the last
/// one also takes the remainder. With more workers than items the leading
/// slices come out empty and the last one holds everything that is left.
///
/// The input order is kept as given, so callers must sort first when they
/// need reproducible boundaries.
pub fn partition<T>(items: &[T], worker_count: usize) -> ScanResult<Vec<WorkSlice<'_, T>>> {
    if worker_count == 0 {
        return Err(ScanError::InvalidWorkerCount);
    }

    let base = items.len() / worker_count;
    let slices = (0..worker_count)
        .map(|worker_id| {
            let start = worker_id * base;
            let end = if worker_id == worker_count - 1 {
                items.len()
            } else {
                start + base
            };
            WorkSlice {
                worker_id,
                offset: start,
                items: &items[start..end],
            }
        })
        .collect();

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes<T>(slices: &[WorkSlice<'_, T>]) -> Vec<usize> {
        slices.iter().map(WorkSlice::len).collect()
    }

    #[test]
    fn test_even_split() {
        let files: Vec<usize> = (0..30).collect();
        assert_eq!(sizes(&partition(&files, 1).unwrap()), vec![30]);
        assert_eq!(sizes(&partition(&files, 3).unwrap()), vec![10, 10, 10]);
        assert_eq!(sizes(&partition(&files, 30).unwrap()), vec![1; 30]);
    }

    #[test]
    fn test_last_slice_absorbs_remainder() {
        let files: Vec<usize> = (0..30).collect();
        assert_eq!(sizes(&partition(&files, 4).unwrap()), vec![7, 7, 7, 9]);
        assert_eq!(sizes(&partition(&files, 7).unwrap()), vec![4, 4, 4, 4, 4, 4, 6]);
    }

    #[test]
    fn test_concatenation_restores_input_for_every_worker_count() {
        let files: Vec<String> = (0..30).map(|i| format!("cpfs_{i:02}.txt")).collect();

        for workers in 1..=files.len() {
            let slices = partition(&files, workers).unwrap();
            assert_eq!(slices.len(), workers);

            let joined: Vec<&String> = slices.iter().flat_map(|s| s.items.iter()).collect();
            let expected: Vec<&String> = files.iter().collect();
            assert_eq!(joined, expected, "coverage broken for {workers} workers");

            let mut next_offset = 0;
            for (id, slice) in slices.iter().enumerate() {
                assert_eq!(slice.worker_id, id);
                assert_eq!(slice.offset, next_offset);
                next_offset += slice.len();
            }
        }
    }

    #[test]
    fn test_more_workers_than_items() {
        let files = ["a", "b", "c"];
        let slices = partition(&files, 5).unwrap();
        assert_eq!(sizes(&slices), vec![0, 0, 0, 0, 3]);
        assert!(slices[0].is_empty());
    }

    #[test]
    fn test_empty_input() {
        let files: [u8; 0] = [];
        let slices = partition(&files, 3).unwrap();
        assert_eq!(sizes(&slices), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let files = [1, 2, 3];
        assert!(matches!(partition(&files, 0), Err(ScanError::InvalidWorkerCount)));
    }
}
