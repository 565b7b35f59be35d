//! Static parallel execution
//!
//! This module knows how to split an ordered list of work items into
//! contiguous slices and how to run one thread per slice behind a join
//! barrier. It knows nothing about CPFs or files.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ Coordinator  │    │ partition()  │    │ SliceExecutor    │
//! │              │───▶│              │───▶│                  │
//! │ sorted files │    │ N slices     │    │ N scoped threads │
//! │ worker count │    │ last absorbs │    │ join barrier     │
//! │              │    │ remainder    │    │                  │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//! ```
//!
//! Assignment is final once the slices are computed: there is no work
//! stealing and no rebalancing, so the last worker may carry more items than
//! the others when the item count is not a multiple of the worker count.
//!
//! # Example
//!
//! ```rust
//! use cpfscan::parallel::{SliceExecutor, partition};
//!
//! let files = ["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"];
//! let slices = partition(&files, 2)?;
//! assert_eq!(slices[0].items, &["a.txt", "b.txt"]);
//! assert_eq!(slices[1].items, &["c.txt", "d.txt", "e.txt"]);
//!
//! let sizes = SliceExecutor::default().execute(&slices, |slice| slice.len())?;
//! assert_eq!(sizes, vec![2, 3]);
//! # Ok::<(), cpfscan::error::ScanError>(())
//! ```

pub mod core;
pub mod partition;
pub mod progress;

pub use self::core::SliceExecutor;
pub use partition::{WorkSlice, partition};
pub use progress::WorkerProgress;
