//! Configuration management for cpfscan
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. `default-config.toml`, embedded at compile time
//! 2. `~/.config/cpfscan/config.toml`
//! 3. `./cpfscan.toml`
//! 4. the file given with `--config`
//! 5. `CPFSCAN_*` environment variables, `__` between section and key
//!    (`CPFSCAN_RUN__THREADS=3`)
//! 6. command-line flags

pub mod core;

use crate::reports::ReportFormat;
use crate::scan::ScanSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use self::core::REPO_CONFIG;

/// Main configuration structure for cpfscan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CpfScanConfig {
    pub input: InputConfig,
    pub run: RunConfig,
    pub report: ReportConfig,
    pub sweep: SweepConfig,
}

/// Where the input files live and how many there must be
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub directory: PathBuf,

    /// Extension of input files, without the dot
    pub extension: String,

    /// Exact number of files required (0 = any non-zero count)
    pub expected_files: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("dados"),
            extension: "txt".to_string(),
            expected_files: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Worker threads (0 = one per CPU core)
    pub threads: usize,

    /// Draw per-worker progress bars
    pub progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            progress: false,
        }
    }
}

impl RunConfig {
    /// Worker count to use, resolving 0 to the number of CPU cores
    pub fn resolved_threads(&self) -> usize {
        resolve_threads(self.threads)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub directory: PathBuf,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: ReportFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Worker counts exercised by `cpfscan sweep`
    pub threads: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            threads: vec![1, 3, 30],
        }
    }
}

impl CpfScanConfig {
    /// Coordinator settings derived from the input and run sections
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            extension: self.input.extension.trim_start_matches('.').to_string(),
            expected_files: (self.input.expected_files > 0).then_some(self.input.expected_files),
            show_progress: self.run.progress,
        }
    }
}

/// 0 means "one worker per CPU core"
pub fn resolve_threads(threads: usize) -> usize {
    if threads == 0 {
        num_cpus::get().max(1)
    } else {
        threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_settings_from_defaults() {
        let settings = CpfScanConfig::default().scan_settings();
        assert_eq!(settings.extension, "txt");
        assert_eq!(settings.expected_files, Some(30));
        assert!(!settings.show_progress);
    }

    #[test]
    fn test_zero_expected_files_accepts_any_count() {
        let mut config = CpfScanConfig::default();
        config.input.expected_files = 0;
        config.input.extension = ".csv".to_string();

        let settings = config.scan_settings();
        assert_eq!(settings.expected_files, None);
        assert_eq!(settings.extension, "csv");
    }

    #[test]
    fn test_thread_resolution() {
        assert_eq!(resolve_threads(3), 3);
        assert!(resolve_threads(0) >= 1);

        let run = RunConfig {
            threads: 30,
            progress: false,
        };
        assert_eq!(run.resolved_threads(), 30);
    }
}
