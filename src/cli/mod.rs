//! Command-line interface for cpfscan
//!
//! Parses arguments with clap and dispatches to the command modules.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use commands::{check::CheckArgs, generate::GenerateArgs, run::RunArgs, sweep::SweepArgs};

/// cpfscan - parallel CPF validation over partitioned input files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and verdicts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Validate every input file once and write a report
    Run(RunArgs),
    /// Run once per worker count and compare timings
    Sweep(SweepArgs),
    /// Validate CPF numbers given on the command line
    Check(CheckArgs),
    /// Write a deterministic input set
    Generate(GenerateArgs),
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose > 0, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, config_path, &output),
            Some(Commands::Sweep(args)) => commands::sweep::execute(args, config_path, &output),
            Some(Commands::Check(args)) => commands::check::execute(args, &output),
            Some(Commands::Generate(args)) => commands::generate::execute(args, config_path, &output),
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config_path),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the verbosity flags.
pub fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
