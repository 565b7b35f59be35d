//! Command implementations for cpfscan CLI
//!
//! Each command is organized into its own module.

pub mod check;
pub mod config;
pub mod generate;
pub mod run;
pub mod sweep;

use crate::reports::ReportFormat;
use clap::Args;
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Input and report flags shared by `run` and `sweep`
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Directory holding the input files
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Extension of the input files
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Required number of input files (0 accepts any non-zero count)
    #[arg(long, value_name = "N")]
    pub expected_files: Option<usize>,

    /// Directory the report is written to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Show per-worker progress bars
    #[arg(long)]
    pub progress: bool,
}

impl ScanArgs {
    /// Config overrides holding only the flags that were given
    pub fn overrides(&self) -> Map<String, Value> {
        let mut input = Map::new();
        if let Some(directory) = &self.input {
            input.insert("directory".into(), json!(directory));
        }
        if let Some(extension) = &self.extension {
            input.insert("extension".into(), json!(extension));
        }
        if let Some(expected) = self.expected_files {
            input.insert("expected_files".into(), json!(expected));
        }

        let mut report = Map::new();
        if let Some(directory) = &self.output {
            report.insert("directory".into(), json!(directory));
        }
        if let Some(format) = self.format {
            report.insert("format".into(), json!(format));
        }

        let mut run = Map::new();
        if self.progress {
            run.insert("progress".into(), json!(true));
        }

        let mut overrides = Map::new();
        for (section, values) in [("input", input), ("report", report), ("run", run)] {
            if !values.is_empty() {
                overrides.insert(section.into(), Value::Object(values));
            }
        }
        overrides
    }
}

/// Worker counts given on the command line must be at least 1
pub fn parse_worker_count(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("worker count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid worker count '{value}': {e}")),
    }
}
