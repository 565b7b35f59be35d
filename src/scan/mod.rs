//! Partitioned CPF validation over a directory of input files
//!
//! A run goes `Listing → Partitioning → Running → Joined → Reported`.
//! Listing captures the input files once, sorted by name, and aborts the run
//! if the count is wrong. The sorted list is cut into one contiguous slice per
//! worker, every worker validates its slice on its own thread and adds its
//! counts to the shared [`Counters`], and the [`Coordinator`] reads the
//! totals only after every worker has been joined.

pub mod coordinator;
pub mod counters;
pub mod listing;
pub mod types;
pub mod worker;

pub use coordinator::{Coordinator, ScanSettings};
pub use counters::Counters;
pub use types::{FileFailure, InputFile, RunReport, Tally};
pub use worker::Worker;
