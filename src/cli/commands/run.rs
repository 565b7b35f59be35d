use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Value, json};
use std::path::Path;

use super::{ScanArgs, parse_worker_count};
use crate::cli::Output;
use crate::config::CpfScanConfig;
use crate::reports;
use crate::scan::{Coordinator, RunReport};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of worker threads
    #[arg(short, long, value_name = "N", value_parser = parse_worker_count)]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

impl RunArgs {
    fn overrides(&self) -> Value {
        let mut overrides = self.scan.overrides();
        if let Some(threads) = self.threads {
            let run = overrides.entry("run").or_insert_with(|| json!({}));
            run["threads"] = json!(threads);
        }
        Value::Object(overrides)
    }
}

pub fn execute(args: RunArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = CpfScanConfig::load(config_path, Some(args.overrides()))?;
    let workers = config.run.resolved_threads();
    let mut settings = config.scan_settings();
    settings.show_progress &= !output.is_quiet();
    let coordinator = Coordinator::new(settings);

    output.verbose(&format!(
        "Validating {} with {} worker{}",
        config.input.directory.display(),
        workers,
        if workers == 1 { "" } else { "s" }
    ));

    let report = coordinator.run(&config.input.directory, workers)?;
    let path = reports::write_report(&report, &config.report.directory, config.report.format)
        .context("Run finished but the report could not be saved")?;

    print_summary(&report, output);
    output.success(&format!("Report written to {}", path.display()));
    Ok(())
}

/// Console mirror of the report artifact, plus any per-file failures
pub fn print_summary(report: &RunReport, output: &Output) {
    output.header(&format!(
        "{} worker{}",
        report.workers,
        if report.workers == 1 { "" } else { "s" }
    ));
    output.key_value("Valid:", &report.valid.to_string(), true);
    output.key_value("Invalid:", &report.invalid.to_string(), false);
    output.key_value("Elapsed:", &format!("{} ms", report.elapsed_ms), false);

    if !report.is_complete() {
        output.warning(&format!(
            "{} of {} files could not be read; counts cover the rest",
            report.failures.len(),
            report.files_total
        ));
        for failure in &report.failures {
            output.warning(&format!("  {}: {}", failure.path.display(), failure.error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threads_flag_lands_in_run_section() {
        let args = RunArgs {
            threads: Some(3),
            scan: ScanArgs {
                progress: true,
                ..ScanArgs::default()
            },
        };

        let overrides = args.overrides();
        assert_eq!(overrides["run"]["threads"], 3);
        assert_eq!(overrides["run"]["progress"], true);
    }

    #[test]
    fn test_no_threads_flag_leaves_config_alone() {
        let args = RunArgs {
            threads: None,
            scan: ScanArgs::default(),
        };
        assert_eq!(args.overrides(), json!({}));
    }
}
