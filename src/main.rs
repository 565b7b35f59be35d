use anyhow::Result;
use clap::Parser;
use cpfscan::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::setup_logging(cli.verbose, cli.quiet);
    cli.run()
}
