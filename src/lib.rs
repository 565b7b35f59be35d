//! # cpfscan - parallel CPF checksum validation
//!
//! Splits a fixed set of text files across N worker threads, validates every
//! line as a CPF number and reports how many were valid, how many were not and
//! how long the run took.
//!
//! ## Layout
//!
//! - [`cpf`]: the checksum validator and a deterministic input generator
//! - [`parallel`]: static partitioning and the scoped slice executor
//! - [`scan`]: workers, shared counters and the run coordinator
//! - [`reports`]: the per-run report artifact
//! - [`config`]: layered configuration
//! - [`cli`]: the `cpfscan` command line
//!
//! ## Quick Start
//!
//! ```bash
//! cpfscan generate --output dados
//! cpfscan run --threads 3
//! cpfscan sweep --threads 1,3,30
//! ```

pub mod cli;
pub mod config;
pub mod cpf;
pub mod error;
pub mod parallel;
pub mod reports;
pub mod scan;

pub use cli::{Cli, Output};
pub use config::CpfScanConfig;
pub use error::{ScanError, ScanResult};

