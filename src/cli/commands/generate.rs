use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::CpfScanConfig;
use crate::cpf::generate::{GenerateOptions, write_input_set};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Target directory (defaults to `input.directory`)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of files
    #[arg(long, default_value_t = GenerateOptions::default().files)]
    pub files: usize,

    /// Lines per file
    #[arg(long, default_value_t = GenerateOptions::default().lines_per_file)]
    pub lines: usize,

    /// Valid lines per file
    #[arg(long, default_value_t = GenerateOptions::default().valid_per_file)]
    pub valid: usize,

    /// Seed for the digit generator
    #[arg(long, default_value_t = GenerateOptions::default().seed)]
    pub seed: u64,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            files: self.files,
            lines_per_file: self.lines,
            valid_per_file: self.valid,
            seed: self.seed,
        }
    }
}

pub fn execute(args: GenerateArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let directory = match &args.output {
        Some(directory) => directory.clone(),
        None => CpfScanConfig::load::<()>(config_path, None)?.input.directory,
    };

    let options = args.options();
    let written = write_input_set(&directory, &options)?;

    output.success(&format!(
        "Wrote {} files to {}",
        written.len(),
        directory.display()
    ));
    output.key_value("Lines:", &(options.files * options.lines_per_file).to_string(), false);
    output.key_value("Valid:", &(options.files * options.valid_per_file).to_string(), true);
    output.key_value(
        "Invalid:",
        &(options.files * (options.lines_per_file - options.valid_per_file)).to_string(),
        false,
    );
    Ok(())
}
