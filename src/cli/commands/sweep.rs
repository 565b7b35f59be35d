use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;
use std::path::Path;

use super::{ScanArgs, parse_worker_count};
use crate::cli::Output;
use crate::config::{CpfScanConfig, resolve_threads};
use crate::reports;
use crate::scan::{Coordinator, RunReport};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Comma-separated worker counts (defaults to `sweep.threads`)
    #[arg(short, long, value_name = "N,...", value_delimiter = ',', value_parser = parse_worker_count)]
    pub threads: Vec<usize>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

pub fn execute(args: SweepArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = CpfScanConfig::load(config_path, Some(Value::Object(args.scan.overrides())))?;

    let counts: Vec<usize> = if args.threads.is_empty() {
        config.sweep.threads.iter().map(|&n| resolve_threads(n)).collect()
    } else {
        args.threads
    };
    if counts.is_empty() {
        bail!("No worker counts to sweep; pass --threads or set sweep.threads");
    }

    let mut settings = config.scan_settings();
    settings.show_progress &= !output.is_quiet();
    let coordinator = Coordinator::new(settings);
    let mut runs: Vec<RunReport> = Vec::with_capacity(counts.len());

    output.info(&format!(
        "Sweeping {} over {} worker count(s)",
        config.input.directory.display(),
        counts.len()
    ));

    for workers in counts {
        output.verbose(&format!("Sweep: {workers} worker(s)"));
        let report = coordinator.run(&config.input.directory, workers)?;
        let path = reports::write_report(&report, &config.report.directory, config.report.format)
            .with_context(|| format!("Run with {workers} worker(s) finished but the report could not be saved"))?;
        output.verbose(&format!("Report written to {}", path.display()));
        runs.push(report);
    }

    print_comparison(&runs, output);

    if let Some(first) = runs.first() {
        let diverging = runs
            .iter()
            .filter(|r| (r.valid, r.invalid) != (first.valid, first.invalid))
            .count();
        if diverging > 0 {
            output.warning(&format!(
                "{diverging} run(s) produced totals different from the {}-worker run",
                first.workers
            ));
        }
        let incomplete = runs.iter().filter(|r| !r.is_complete()).count();
        if incomplete > 0 {
            output.warning(&format!("{incomplete} run(s) skipped unreadable files"));
        }
    }

    output.success(&format!(
        "{} reports written to {}",
        runs.len(),
        config.report.directory.display()
    ));
    Ok(())
}

/// Speedup relative to the first run; `None` when either side measured 0 ms
fn speedup(baseline_ms: u64, elapsed_ms: u64) -> Option<f64> {
    (baseline_ms > 0 && elapsed_ms > 0).then(|| baseline_ms as f64 / elapsed_ms as f64)
}

fn print_comparison(runs: &[RunReport], output: &Output) {
    let Some(baseline) = runs.first() else {
        return;
    };

    output.header("Sweep results");
    output.table_row(&[
        "Workers".to_string(),
        "Elapsed".to_string(),
        "Valid".to_string(),
        "Invalid".to_string(),
        "Speedup".to_string(),
    ]);
    for run in runs {
        let ratio = speedup(baseline.elapsed_ms, run.elapsed_ms)
            .map(|s| format!("{s:.2}x"))
            .unwrap_or_else(|| "-".to_string());
        output.table_row(&[
            run.workers.to_string(),
            format!("{} ms", run.elapsed_ms),
            run.valid.to_string(),
            run.invalid.to_string(),
            ratio,
        ]);
    }
}
